use std::sync::mpsc::{self, SyncSender};
use std::thread::JoinHandle;

use mylogger_store::{RecordFields, Store};

use crate::template;

/// One deferred write: the field map plus the acknowledgement template the
/// worker resolves and prints once the insert has actually happened.
pub(crate) struct Job {
    pub fields: RecordFields,
    pub template: String,
}

/// Bounded task queue with a single-writer drain loop feeding the store.
///
/// In enqueue mode the capture path returns as soon as the job is queued;
/// the acknowledgement is printed by the worker after its insert completes,
/// so the id it reports is always real. Shutdown policy: dropping the queue
/// closes the channel and joins the worker, draining every queued write
/// before the process moves on; nothing is discarded.
pub(crate) struct WriteQueue {
    // tx is declared (and therefore dropped) before the worker handle so the
    // drain loop sees the channel close during Drop.
    tx: Option<SyncSender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl WriteQueue {
    pub fn new(store: Store, capacity: usize) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel::<Job>(capacity);
        let worker = std::thread::Builder::new()
            .name("mylogger-writer".to_string())
            .spawn(move || {
                while let Ok(job) = rx.recv() {
                    let id = store.insert(&job.fields);
                    println!("{}", template::resolve_id(&job.template, id));
                }
            })?;

        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Queue one write; blocks only when the queue is at capacity.
    pub fn enqueue(&self, fields: RecordFields, template: String) {
        if let Some(tx) = &self.tx
            && tx.send(Job { fields, template }).is_err()
        {
            println!("Critical failure: deferred write queue is closed");
        }
    }

    /// Cloneable sender for moving an enqueue onto a blocking task.
    pub fn sender(&self) -> Option<SyncSender<Job>> {
        self.tx.clone()
    }
}

impl Drop for WriteQueue {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
