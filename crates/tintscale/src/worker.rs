//! Scale generation off the calling thread.
//!
//! The worker protocol is a reduced echo of [`generate_hexes`]: A request
//! names base color, number of steps, and optional lightness shift, and the
//! response carries the hexadecimal colors. [`handle_request`] and
//! [`handle_message`] are the pure handlers for hosts that bring their own
//! threads, e.g., a browser worker. [`PaletteWorker`] runs the handler on a
//! background thread.
//!
//! ```
//! # use tintscale::worker::handle_message;
//! # use tintscale::error::PaletteError;
//! let response = handle_message(r##"{"baseHex":"#6a8d51","steps":2}"##)?;
//! assert_eq!(response, r##"{"colors":["#DCFFC2","#000800"]}"##);
//! # Ok::<(), PaletteError>(())
//! ```

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::scale::generate_hexes;
use crate::Float;

/// A request to generate a scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRequest {
    pub base_hex: String,
    pub steps: usize,
    #[serde(default)]
    pub shift: Float,
}

/// The generated scale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerResponse {
    pub colors: Vec<String>,
}

/// Handle the request.
pub fn handle_request(request: &WorkerRequest) -> Result<WorkerResponse, PaletteError> {
    let colors = generate_hexes(&request.base_hex, request.steps, request.shift)?;
    Ok(WorkerResponse { colors })
}

/// Handle the JSON-encoded request and return the JSON-encoded response.
pub fn handle_message(message: &str) -> Result<String, PaletteError> {
    let request: WorkerRequest = serde_json::from_str(message)?;
    let response = handle_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}

// --------------------------------------------------------------------------------------------------------------------

type Reply = Sender<Result<WorkerResponse, PaletteError>>;

/// A background thread generating scales.
///
/// Each call to [`PaletteWorker::generate`] sends the request to the thread
/// and blocks until the response arrives. Results are identical to calling
/// [`handle_request`] directly. Dropping the worker stops and joins the
/// thread.
///
/// ```
/// # use tintscale::worker::{PaletteWorker, WorkerRequest};
/// # use tintscale::error::PaletteError;
/// let worker = PaletteWorker::spawn()?;
/// let response = worker.generate(WorkerRequest {
///     base_hex: "#4f46e5".to_string(),
///     steps: 11,
///     shift: 0.0,
/// })?;
/// assert_eq!(response.colors.len(), 11);
/// # Ok::<(), PaletteError>(())
/// ```
#[derive(Debug)]
pub struct PaletteWorker {
    sender: Option<Sender<(WorkerRequest, Reply)>>,
    handle: Option<JoinHandle<()>>,
}

impl PaletteWorker {
    /// Spawn a new worker thread.
    pub fn spawn() -> Result<Self, PaletteError> {
        let (sender, receiver) = channel();
        let handle = thread::Builder::new()
            .name("tintscale-worker".to_owned())
            .spawn(move || run(receiver))
            .map_err(|_| PaletteError::WorkerGone)?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    /// Generate the requested scale on the worker thread.
    pub fn generate(&self, request: WorkerRequest) -> Result<WorkerResponse, PaletteError> {
        let sender = self.sender.as_ref().ok_or(PaletteError::WorkerGone)?;
        let (reply, response) = channel();
        sender
            .send((request, reply))
            .map_err(|_| PaletteError::WorkerGone)?;
        response.recv().map_err(|_| PaletteError::WorkerGone)?
    }
}

fn run(receiver: Receiver<(WorkerRequest, Reply)>) {
    for (request, reply) in receiver {
        if reply.send(handle_request(&request)).is_err() {
            warn!("reply channel for {:?} closed before response", request.base_hex);
        }
    }
}

impl Drop for PaletteWorker {
    fn drop(&mut self) {
        // Closing the channel ends the thread's receive loop.
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("palette worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::OutOfRangeError;

    #[test]
    fn test_handle_request() {
        let request = WorkerRequest {
            base_hex: "#6a8d51".to_owned(),
            steps: 11,
            shift: 0.0,
        };
        let response = handle_request(&request).unwrap();
        assert_eq!(response.colors, generate_hexes("#6a8d51", 11, 0.0).unwrap());

        let request = WorkerRequest {
            steps: 99,
            ..request
        };
        assert!(matches!(
            handle_request(&request),
            Err(PaletteError::Range(OutOfRangeError { option: "steps", .. }))
        ));
    }

    #[test]
    fn test_handle_message() {
        let response = handle_message(r##"{"baseHex":"#6a8d51","steps":3,"shift":0.1}"##).unwrap();
        let response: WorkerResponse = serde_json::from_str(&response).unwrap();
        assert_eq!(response.colors, generate_hexes("#6a8d51", 3, 0.1).unwrap());

        assert!(matches!(
            handle_message(r#"{"steps":3}"#),
            Err(PaletteError::Message(_))
        ));
        assert!(matches!(
            handle_message(r#"{"baseHex":"nope","steps":3}"#),
            Err(PaletteError::Color(_))
        ));
    }

    #[test]
    fn test_palette_worker() {
        let worker = PaletteWorker::spawn().unwrap();
        for (steps, shift) in [(5, 0.0), (11, -0.1), (15, 0.25)] {
            let request = WorkerRequest {
                base_hex: "#4f46e5".to_owned(),
                steps,
                shift,
            };
            let expected = handle_request(&request).unwrap();
            assert_eq!(worker.generate(request).unwrap(), expected);
        }

        let error = worker.generate(WorkerRequest {
            base_hex: "#4f46e5".to_owned(),
            steps: 0,
            shift: 0.0,
        });
        assert!(error.is_err());
        drop(worker);
    }
}
