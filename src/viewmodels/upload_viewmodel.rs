// ============================================================================
// UPLOAD VIEWMODEL - Envío del formulario y mensaje de estado
// ============================================================================
// Flujo: begin (seq + limpiar) → POST → classify_response → settle → timer
// Solo el envío más reciente puede tocar el mensaje; su timer lo limpia a
// los 10 s. Los timers de envíos anteriores no hacen nada.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::File;
use crate::models::{classify_response, ResponseOutcome, StatusBoard, StatusMessage, UploadForm};
use crate::services::UploadTransport;
use crate::state::AppState;
use crate::utils::constants::STATUS_CLEAR_DELAY_MS;
use crate::utils::Scheduler;
use crate::views::{ArtifactSaver, StatusSink};

pub struct UploadViewModel<T, S, V, D>
where
    T: UploadTransport,
    S: Scheduler,
    V: StatusSink + 'static,
    D: ArtifactSaver,
{
    transport: T,
    scheduler: S,
    view: Rc<V>,
    saver: D,
    state: AppState,
    board: Rc<RefCell<StatusBoard>>,
}

impl<T, S, V, D> UploadViewModel<T, S, V, D>
where
    T: UploadTransport,
    S: Scheduler,
    V: StatusSink + 'static,
    D: ArtifactSaver,
{
    pub fn new(transport: T, scheduler: S, view: V, saver: D, state: AppState) -> Self {
        Self {
            transport,
            scheduler,
            view: Rc::new(view),
            saver,
            state,
            board: Rc::new(RefCell::new(StatusBoard::new())),
        }
    }

    #[cfg(test)]
    pub fn current_status(&self) -> StatusMessage {
        self.board.borrow().current().clone()
    }

    pub async fn submit(&self, form: UploadForm, file: Option<File>) {
        let seq = self.begin_submission();

        let outcome = match self.transport.upload(&form, file).await {
            Ok(raw) => classify_response(raw.content_type.as_deref(), raw.body, form.file_name.as_deref()),
            Err(e) => ResponseOutcome::failure(e),
        };

        self.settle(seq, outcome);
    }

    /// Nuevo número de secuencia + limpiar mensaje y decoración
    fn begin_submission(&self) -> u64 {
        let seq = self.board.borrow_mut().begin();
        self.view.render(&StatusMessage::Empty);
        log::info!("📤 [UPLOAD] Envío #{}", seq);
        seq
    }

    fn settle(&self, seq: u64, outcome: ResponseOutcome) {
        let status = self.resolve_status(outcome);

        if !self.board.borrow_mut().settle(seq, status.clone()) {
            log::warn!("⚠️ [UPLOAD] Respuesta del envío #{} superada, se ignora", seq);
            return;
        }

        match &status {
            StatusMessage::Error(text) => log::error!("❌ [UPLOAD] #{}: {}", seq, text),
            _ => log::info!("✅ [UPLOAD] #{}: {}", seq, status.text()),
        }
        self.view.render(&status);
        self.arm_clear_timer(seq);
    }

    /// Traducir el resultado a mensaje (la descarga se dispara aquí)
    fn resolve_status(&self, outcome: ResponseOutcome) -> StatusMessage {
        let templates = self.state.templates();
        match outcome {
            ResponseOutcome::Acknowledgement { message } => {
                StatusMessage::Success(format!("{}{}", templates.process_success, message))
            }
            ResponseOutcome::Artifact { bytes, suggested_filename } => {
                match self.saver.save(&bytes, &suggested_filename) {
                    Ok(()) => StatusMessage::Success(templates.download_success),
                    Err(reason) => StatusMessage::upload_error(&reason),
                }
            }
            ResponseOutcome::Failure { reason } => StatusMessage::upload_error(&reason),
        }
    }

    fn arm_clear_timer(&self, seq: u64) {
        let board = self.board.clone();
        let view = self.view.clone();
        self.scheduler.schedule(
            STATUS_CLEAR_DELAY_MS,
            Box::new(move || {
                if board.borrow_mut().expire(seq) {
                    view.render(&StatusMessage::Empty);
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawResponse, TranslationBundle, UploadError};
    use crate::utils::scheduler::Task;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::collections::VecDeque;

    #[derive(Clone, Default)]
    struct FakeTransport {
        responses: Rc<RefCell<VecDeque<Result<RawResponse, UploadError>>>>,
        sent: Rc<RefCell<Vec<UploadForm>>>,
    }

    impl FakeTransport {
        fn respond(&self, response: Result<RawResponse, UploadError>) {
            self.responses.borrow_mut().push_back(response);
        }
    }

    impl UploadTransport for FakeTransport {
        async fn upload(&self, form: &UploadForm, _file: Option<File>) -> Result<RawResponse, UploadError> {
            self.sent.borrow_mut().push(form.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(UploadError::Transport("no response queued".into())))
        }
    }

    /// Reloj manual: los timers se disparan con `advance`
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now: Rc<Cell<u64>>,
        pending: Rc<RefCell<Vec<(u64, Task)>>>,
        delays: Rc<RefCell<Vec<u32>>>,
    }

    impl ManualScheduler {
        fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Task> = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= now);
                *pending = rest;
                due.into_iter().map(|(_, task)| task).collect()
            };
            for task in due {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Task) {
            self.delays.borrow_mut().push(delay_ms);
            self.pending
                .borrow_mut()
                .push((self.now.get() + u64::from(delay_ms), task));
        }
    }

    #[derive(Clone, Default)]
    struct RecordingStatusView {
        rendered: Rc<RefCell<Vec<StatusMessage>>>,
    }

    impl RecordingStatusView {
        fn last(&self) -> StatusMessage {
            self.rendered.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl StatusSink for RecordingStatusView {
        fn render(&self, status: &StatusMessage) {
            self.rendered.borrow_mut().push(status.clone());
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSaver {
        saved: Rc<RefCell<Vec<(Vec<u8>, String)>>>,
        fail: bool,
    }

    impl ArtifactSaver for RecordingSaver {
        fn save(&self, bytes: &[u8], filename: &str) -> Result<(), String> {
            if self.fail {
                return Err("Download blocked".into());
            }
            self.saved.borrow_mut().push((bytes.to_vec(), filename.to_string()));
            Ok(())
        }
    }

    struct Harness {
        vm: UploadViewModel<FakeTransport, ManualScheduler, RecordingStatusView, RecordingSaver>,
        transport: FakeTransport,
        scheduler: ManualScheduler,
        view: RecordingStatusView,
        saver: RecordingSaver,
    }

    fn harness_with_saver(saver: RecordingSaver) -> Harness {
        let transport = FakeTransport::default();
        let scheduler = ManualScheduler::default();
        let view = RecordingStatusView::default();
        let state = AppState::new();
        state.apply_bundle_templates(&TranslationBundle {
            process_success: "Processed".into(),
            download_success: "File downloaded".into(),
            ..Default::default()
        });
        let vm = UploadViewModel::new(transport.clone(), scheduler.clone(), view.clone(), saver.clone(), state);
        Harness { vm, transport, scheduler, view, saver }
    }

    fn harness() -> Harness {
        harness_with_saver(RecordingSaver::default())
    }

    fn json_response(body: &str) -> Result<RawResponse, UploadError> {
        Ok(RawResponse {
            content_type: Some("application/json".into()),
            body: body.as_bytes().to_vec(),
        })
    }

    fn form() -> UploadForm {
        UploadForm::new("2024-05-01", "BG80FINV91501234567890", "acme ltd", Some("O240501p.dp1".into()))
    }

    #[test]
    fn test_acknowledgement_uses_prefix_template() {
        let h = harness();
        h.transport.respond(json_response(r#"{"success":true,"message":"OK"}"#));
        block_on(h.vm.submit(form(), None));
        assert_eq!(h.view.last(), StatusMessage::Success("Processed: OK".into()));
        assert_eq!(h.view.last().decoration(), Some("success"));
    }

    #[test]
    fn test_rejection_renders_error() {
        let h = harness();
        h.transport.respond(json_response(r#"{"success":false,"msg":"bad iban"}"#));
        block_on(h.vm.submit(form(), None));
        assert_eq!(h.view.last().text(), "Error uploading file: bad iban");
        assert_eq!(h.view.last().decoration(), Some("error"));
    }

    #[test]
    fn test_artifact_is_saved_with_selected_file_name() {
        let h = harness();
        h.transport.respond(Ok(RawResponse {
            content_type: Some("application/octet-stream".into()),
            body: b"OMPDP;01052024;...".to_vec(),
        }));
        block_on(h.vm.submit(form(), None));
        let saved = h.saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, "O240501p.dp1");
        assert_eq!(saved[0].0, b"OMPDP;01052024;...".to_vec());
        assert_eq!(h.view.last(), StatusMessage::Success("File downloaded".into()));
    }

    #[test]
    fn test_download_failure_renders_error() {
        let h = harness_with_saver(RecordingSaver { fail: true, ..Default::default() });
        h.transport.respond(Ok(RawResponse {
            content_type: Some("application/octet-stream".into()),
            body: vec![0],
        }));
        block_on(h.vm.submit(form(), None));
        assert_eq!(h.view.last().text(), "Error uploading file: Download blocked");
    }

    #[test]
    fn test_unsupported_content_type() {
        let h = harness();
        h.transport.respond(Ok(RawResponse {
            content_type: Some("text/plain".into()),
            body: b"hi".to_vec(),
        }));
        block_on(h.vm.submit(form(), None));
        assert_eq!(
            h.view.last().text(),
            "Error uploading file: Unsupported content type: text/plain"
        );
    }

    #[test]
    fn test_transport_error_renders_error() {
        let h = harness();
        h.transport.respond(Err(UploadError::Transport("Network error: Failed to fetch".into())));
        block_on(h.vm.submit(form(), None));
        assert_eq!(h.view.last().text(), "Error uploading file: Network error: Failed to fetch");
    }

    #[test]
    fn test_submit_clears_status_first_and_sends_normalized_form() {
        let h = harness();
        h.transport.respond(json_response(r#"{"success":true,"message":"OK"}"#));
        block_on(h.vm.submit(form(), None));
        assert_eq!(h.view.rendered.borrow()[0], StatusMessage::Empty);

        let sent = h.transport.sent.borrow();
        assert_eq!(sent[0].execution_date, "20240501");
        assert_eq!(sent[0].company_name, "ACME LTD");
    }

    #[test]
    fn test_status_cleared_after_ten_seconds_not_before() {
        let h = harness();
        h.transport.respond(json_response(r#"{"success":false,"msg":"x"}"#));
        block_on(h.vm.submit(form(), None));
        assert_eq!(h.scheduler.delays.borrow().as_slice(), [10_000u32]);

        h.scheduler.advance(9_999);
        assert_eq!(h.vm.current_status().text(), "Error uploading file: x");
        assert_eq!(h.view.last().decoration(), Some("error"));

        h.scheduler.advance(1);
        assert_eq!(h.vm.current_status(), StatusMessage::Empty);
        assert_eq!(h.view.last(), StatusMessage::Empty);
    }

    #[test]
    fn test_first_timer_does_not_clear_second_submission() {
        let h = harness();
        h.transport.respond(json_response(r#"{"success":true,"message":"one"}"#));
        block_on(h.vm.submit(form(), None));

        h.scheduler.advance(6_000);
        h.transport.respond(json_response(r#"{"success":true,"message":"two"}"#));
        block_on(h.vm.submit(form(), None));

        // El timer del primer envío vence aquí y no debe tocar nada
        h.scheduler.advance(4_000);
        assert_eq!(h.vm.current_status(), StatusMessage::Success("Processed: two".into()));

        h.scheduler.advance(6_000);
        assert_eq!(h.vm.current_status(), StatusMessage::Empty);
    }

    #[test]
    fn test_superseded_response_does_not_touch_status() {
        let h = harness();
        let stale = h.vm.begin_submission();
        let latest = h.vm.begin_submission();

        h.vm.settle(latest, ResponseOutcome::Acknowledgement { message: "latest".into() });
        h.vm.settle(stale, ResponseOutcome::Failure { reason: "late".into() });

        assert_eq!(h.vm.current_status(), StatusMessage::Success("Processed: latest".into()));
        assert_eq!(h.view.last(), StatusMessage::Success("Processed: latest".into()));
        // Solo el envío vigente arma timer
        assert_eq!(h.scheduler.delays.borrow().len(), 1);
    }

    #[test]
    fn test_superseded_artifact_is_still_saved() {
        let h = harness();
        let stale = h.vm.begin_submission();
        let _latest = h.vm.begin_submission();
        h.vm.settle(
            stale,
            ResponseOutcome::Artifact { bytes: vec![9], suggested_filename: "a.dp1".into() },
        );
        assert_eq!(h.saver.saved.borrow().len(), 1);
        assert_eq!(h.vm.current_status(), StatusMessage::Empty);
    }
}
