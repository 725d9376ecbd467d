//! Shared Tokio runtime and mock review service helpers for integration
//! tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use review_client::{ClientConfig, ReviewClient};
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Mounts `mock` on the server held in `server`.
///
/// # Errors
///
/// Returns an error if the runtime or server slot is empty.
pub fn mount(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
    mock: Mock,
) -> Result<(), io::Error> {
    let shared_runtime = ensure_runtime_and_server(runtime, server)?;
    server
        .with_ref(|mock_server| shared_runtime.block_on(mock.mount(mock_server)))
        .ok_or_else(|| io::Error::other("mock server not initialised"))
}

/// Builds a client whose base address is the server's `/api` prefix.
///
/// # Errors
///
/// Returns an error if the server slot is empty or the client cannot be
/// built.
pub fn client_for(server: &Slot<MockServer>) -> Result<ReviewClient, Box<dyn std::error::Error>> {
    let base = server
        .with_ref(|mock_server| format!("{}/api", mock_server.uri()))
        .ok_or("mock server not initialised")?;
    Ok(ReviewClient::new(ClientConfig::new(&base)?)?)
}
