use alloc::{sync::Arc, task::Wake};
use core::{
    future::Future,
    pin::Pin,
    sync::atomic::{
        AtomicBool,
        Ordering::{Acquire, Release},
    },
    task::{Context, Poll, Waker},
};

use spin::Mutex;

use crate::{
    traits::{OperationState, ReceiverOf, Sender, SenderTo, TypedSender},
    BoxError,
};

/// Adapts a future into a sender: polled from `start` and from its waker,
/// the output delivered on the value channel. Dropping the operation
/// before completion drops the future in place.
pub fn from_future<F: Future>(future: F) -> FromFuture<F> {
    FromFuture(future)
}

pub struct FromFuture<F>(F);

impl<F: Future> Sender for FromFuture<F> {}

impl<F: Future> TypedSender for FromFuture<F> {
    type Output = F::Output;
    type Error = BoxError;

    const SENDS_DONE: bool = false;
}

impl<F, R> SenderTo<R> for FromFuture<F>
where
    F: Future + Send + 'static,
    R: ReceiverOf<F::Output> + Send + 'static,
{
    type Operation = FutureOp<F, R>;

    fn connect(self, receiver: R) -> FutureOp<F, R> {
        FutureOp(Arc::new(Shared {
            inner: Mutex::new(Some(Inner {
                future: self.0,
                receiver: Some(receiver),
            })),
            again: AtomicBool::new(true),
        }))
    }
}

struct Inner<F, R> {
    future: F,
    receiver: Option<R>,
}

struct Shared<F, R> {
    inner: Mutex<Option<Inner<F, R>>>,
    again: AtomicBool,
}

impl<F, R> Shared<F, R>
where
    F: Future + Send + 'static,
    R: ReceiverOf<F::Output> + Send + 'static,
{
    // Whoever holds the lock drains the wake flag; a waker losing the
    // `try_lock` race leaves the flag set, and the flag is re-checked
    // after unlocking so a wake landing in between is not lost.
    fn poll_pending(this: &Arc<Self>) {
        while this.again.load(Acquire) {
            let Some(mut guard) = this.inner.try_lock() else {
                return;
            };
            while this.again.swap(false, Acquire) {
                let Some(inner) = guard.as_mut() else {
                    return;
                };
                let waker = Waker::from(this.clone());
                let mut cx = Context::from_waker(&waker);
                // SAFETY: the future lives inside the shared allocation and
                // is never moved out; completion and cancellation both drop
                // it in place by clearing the slot.
                let future = unsafe { Pin::new_unchecked(&mut inner.future) };
                if let Poll::Ready(output) = future.poll(&mut cx) {
                    let receiver = inner
                        .receiver
                        .take()
                        .expect("future resolved after completion");
                    *guard = None;
                    drop(guard);
                    receiver.set_value(output);
                    return;
                }
            }
            drop(guard);
        }
    }
}

impl<F, R> Wake for Shared<F, R>
where
    F: Future + Send + 'static,
    R: ReceiverOf<F::Output> + Send + 'static,
{
    fn wake(self: Arc<Self>) {
        self.again.store(true, Release);
        Self::poll_pending(&self);
    }
}

pub struct FutureOp<F, R>(Arc<Shared<F, R>>);

impl<F, R> Unpin for FutureOp<F, R> {}

impl<F, R> Drop for FutureOp<F, R> {
    fn drop(&mut self) {
        // A late waker finds the slot empty.
        *self.0.inner.lock() = None;
    }
}

impl<F, R> OperationState for FutureOp<F, R>
where
    F: Future + Send + 'static,
    R: ReceiverOf<F::Output> + Send + 'static,
{
    fn start(self: Pin<&mut Self>) {
        Shared::poll_pending(&self.get_mut().0);
    }
}

crate::impl_pipe!(impl [F,] FromFuture<F>);
