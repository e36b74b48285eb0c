use alloc::{boxed::Box, sync::Arc};
use core::{cell::UnsafeCell, pin::Pin};

use crate::traits::{OperationState, Receiver, ReceiverOf, ReceiverOfError, SenderTo};

/// Connects `sender` to `receiver` and starts the operation detached: the
/// state lives in a shared heap cell, freed once both the completion and
/// this call are done with it.
pub fn submit<S, R>(sender: S, receiver: R)
where
    S: SenderTo<SubmitReceiver<R>>,
    S::Operation: Send + 'static,
{
    let cell = Arc::new(SubmitCell {
        op: UnsafeCell::new(None),
    });
    let op = sender.connect(SubmitReceiver {
        cell: cell.clone(),
        receiver,
    });
    // SAFETY: the cell is freshly allocated and this frame is its only
    // writer. The second handle held here keeps the cell alive until
    // `start` returns, so a completion that fires on `start`'s own stack
    // (or concurrently on another thread) cannot free the operation while
    // it is still running; the boxed operation itself is never moved again.
    unsafe {
        let slot = &mut *cell.op.get();
        let op = slot.insert(Box::pin(op));
        op.as_mut().start();
    }
}

struct SubmitCell {
    op: UnsafeCell<Option<Pin<Box<dyn OperationState + Send>>>>,
}

// SAFETY: the operation in the cell is mutated only from inside `submit`,
// before `start` returns; every other handle merely drops its `Arc`, and
// the contents are dropped by the last handle alone.
unsafe impl Send for SubmitCell {}
unsafe impl Sync for SubmitCell {}

pub struct SubmitReceiver<R> {
    cell: Arc<SubmitCell>,
    receiver: R,
}

impl<R: Receiver> Receiver for SubmitReceiver<R> {
    type Env = R::Env;

    fn env(&self) -> &R::Env {
        self.receiver.env()
    }

    fn set_done(self) {
        let Self { cell, receiver } = self;
        receiver.set_done();
        drop(cell);
    }
}

impl<R, E> ReceiverOfError<E> for SubmitReceiver<R>
where
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        let Self { cell, receiver } = self;
        receiver.set_error(error);
        drop(cell);
    }
}

impl<R, T> ReceiverOf<T> for SubmitReceiver<R>
where
    R: ReceiverOf<T>,
{
    fn set_value(self, value: T) {
        let Self { cell, receiver } = self;
        receiver.set_value(value);
        drop(cell);
    }
}
