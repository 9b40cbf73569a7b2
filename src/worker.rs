// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving off the interactive path.
//!
//! A single background thread takes tagged requests over a channel.
//! Buffers move across in both directions; nothing is shared except a
//! generation counter.  Submitting a new request bumps the counter,
//! and the carver in flight sees the change at its next checkpoint and
//! abandons its work.  Abandoned work produces no response at all.
//!
//! Responses for superseded requests can still arrive if they
//! finished before the newer request was submitted;
//! [`CarveWorker::recv_latest`] drops those.

use crate::error::{CarveError, Result};
use crate::pixels::RgbaBuffer;
use crate::seamcarver::{CarveOptions, Carved, SeamCarver};
use crossbeam::channel::{unbounded, Receiver, Sender};
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

#[derive(Debug)]
pub struct Request {
    pub tag: u64,
    pub buffer: RgbaBuffer,
    pub lines: u32,
}

#[derive(Debug)]
pub struct Response {
    pub tag: u64,
    pub result: Result<RgbaBuffer>,
}

pub struct CarveWorker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    latest: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

fn serve(
    requests: Receiver<Request>,
    responses: Sender<Response>,
    latest: Arc<AtomicU64>,
    options: CarveOptions,
) {
    for Request { tag, buffer, lines } in requests {
        if latest.load(Ordering::SeqCst) != tag {
            debug!("skipping superseded request {}", tag);
            continue;
        }
        let result = SeamCarver::with_options(buffer, lines, options)
            .map(|carver| carver.run(|| latest.load(Ordering::SeqCst) != tag));
        let result = match result {
            Ok(Carved::Complete(buffer)) => Ok(buffer),
            Ok(Carved::Cancelled { seams_removed, .. }) => {
                debug!("request {} abandoned after {} seams", tag, seams_removed);
                continue;
            }
            Err(err) => Err(err),
        };
        if responses.send(Response { tag, result }).is_err() {
            warn!("response channel closed; carving worker exiting");
            return;
        }
    }
}

impl CarveWorker {
    /// Start the background thread.
    pub fn spawn(options: CarveOptions) -> Self {
        let (request_tx, request_rx) = unbounded();
        let (response_tx, response_rx) = unbounded();
        let latest = Arc::new(AtomicU64::new(0));
        let shared = Arc::clone(&latest);
        let handle = thread::spawn(move || serve(request_rx, response_tx, shared, options));
        CarveWorker {
            requests: Some(request_tx),
            responses: response_rx,
            latest,
            handle: Some(handle),
        }
    }

    /// Hand a buffer to the worker, superseding anything still in
    /// flight.  Returns the tag the response will carry.
    pub fn submit(&self, buffer: RgbaBuffer, lines: u32) -> Result<u64> {
        let tag = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let requests = self.requests.as_ref().ok_or(CarveError::WorkerGone)?;
        requests
            .send(Request { tag, buffer, lines })
            .map_err(|_| CarveError::WorkerGone)?;
        Ok(tag)
    }

    /// The tag of the most recent submission.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// The raw response stream, stale tags included.
    pub fn responses(&self) -> &Receiver<Response> {
        &self.responses
    }

    /// Block until the response for the most recent submission
    /// arrives, discarding any stale ones on the way.
    pub fn recv_latest(&self) -> Result<RgbaBuffer> {
        loop {
            let response = self.responses.recv().map_err(|_| CarveError::WorkerGone)?;
            if response.tag == self.latest() {
                return response.result;
            }
            debug!("discarding stale response {}", response.tag);
        }
    }
}

impl Drop for CarveWorker {
    fn drop(&mut self) {
        // Bump the generation so a long carve stops at its next
        // checkpoint, then close the channel and wait.
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("carving worker panicked");
            }
        }
    }
}
