//! Local task executor backed by the browser event loop.

use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};

/// Hands tasks to `wasm_bindgen_futures::spawn_local`.
/// Tasks run on the UI thread between frames and never block it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
