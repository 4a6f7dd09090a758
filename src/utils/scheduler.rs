// ============================================================================
// SCHEDULER - Temporizadores one-shot
// ============================================================================

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Programa una tarea para ejecutarse una sola vez tras `delay_ms`
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Scheduler del navegador (setTimeout vía gloo_timers)
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        // Sin cancelación: el timer vive hasta dispararse
        Timeout::new(delay_ms, task).forget();
    }
}
