// ============================================================================
// STORAGE - Almacén clave/valor (localStorage con fallback en memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};

/// Almacén de strings por clave
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Almacén del navegador: localStorage si está disponible (no lo está en
/// algunos modos privados), si no un mapa en memoria que dura lo que la página
#[derive(Clone)]
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn new() -> Self {
        match get_local_storage() {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                log::warn!("⚠️ [STORAGE] localStorage no disponible, usando memoria");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|_| "Error guardando en localStorage".to_string()),
            BrowserStore::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        match self {
            BrowserStore::Local(storage) => storage
                .remove_item(key)
                .map_err(|_| "Error eliminando de localStorage".to_string()),
            BrowserStore::Memory(memory) => memory.remove(key),
        }
    }
}

/// Mapa compartido en memoria (clones ven los mismos datos)
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
