use core::pin::pin;

use crate::traits::{
    OperationState, Receiver, ReceiverOf, ReceiverOfError, SenderTo, Signal, TypedSender,
};

/// Drives `sender` to completion on the calling thread: `Ok(Some(values))`
/// on a value, `Ok(None)` on cancellation, `Err(error)` on failure.
pub fn sync_wait<S>(sender: S) -> Result<Option<S::Output>, S::Error>
where
    S: TypedSender + SenderTo<WaitRecv<S::Output, S::Error>>,
{
    let (tx, rx) = oneshot::channel();
    let mut op = pin!(sender.connect(WaitRecv(tx)));
    op.as_mut().start();

    match rx.recv() {
        Ok(Signal::Value(values)) => Ok(Some(values)),
        Ok(Signal::Error(error)) => Err(error),
        Ok(Signal::Done) => Ok(None),
        Err(_) => panic!("operation finished without completing its receiver"),
    }
}

/// Awaits `sender` from a future. The operation lives inside the awaiting
/// frame, so cancelling the future cancels the operation.
pub async fn wait<S>(sender: S) -> Result<Option<S::Output>, S::Error>
where
    S: TypedSender + SenderTo<WaitRecv<S::Output, S::Error>>,
{
    let (tx, rx) = oneshot::channel();
    let mut op = pin!(sender.connect(WaitRecv(tx)));
    op.as_mut().start();

    match rx.await {
        Ok(Signal::Value(values)) => Ok(Some(values)),
        Ok(Signal::Error(error)) => Err(error),
        Ok(Signal::Done) => Ok(None),
        Err(_) => panic!("operation finished without completing its receiver"),
    }
}

pub struct WaitRecv<T, E>(oneshot::Sender<Signal<T, E>>);

impl<T, E> Receiver for WaitRecv<T, E> {
    type Env = ();

    fn env(&self) -> &() {
        &()
    }

    fn set_done(self) {
        let _ = self.0.send(Signal::Done);
    }
}

impl<T, E, Up> ReceiverOfError<Up> for WaitRecv<T, E>
where
    Up: Into<E>,
{
    fn set_error(self, error: Up) {
        let _ = self.0.send(Signal::Error(error.into()));
    }
}

impl<T, E> ReceiverOf<T> for WaitRecv<T, E> {
    fn set_value(self, values: T) {
        let _ = self.0.send(Signal::Value(values));
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use core::pin::Pin;

    use super::*;
    use crate::{
        traits::{OperationState, Sender},
        util::{just, then},
        BoxError,
    };

    // Completes with `set_value(())` from a helper thread after a delay.
    struct Defer(Duration);

    impl Sender for Defer {}

    impl TypedSender for Defer {
        type Output = ();
        type Error = BoxError;

        const SENDS_DONE: bool = false;
    }

    impl<R> SenderTo<R> for Defer
    where
        R: ReceiverOf<()> + Send + 'static,
    {
        type Operation = DeferOp<R>;

        fn connect(self, receiver: R) -> DeferOp<R> {
            DeferOp(Some((self.0, receiver)))
        }
    }

    struct DeferOp<R>(Option<(Duration, R)>);

    impl<R> Unpin for DeferOp<R> {}

    impl<R> OperationState for DeferOp<R>
    where
        R: ReceiverOf<()> + Send + 'static,
    {
        fn start(self: Pin<&mut Self>) {
            let (delay, receiver) = self.get_mut().0.take().unwrap();
            thread::spawn(move || {
                thread::sleep(delay);
                receiver.set_value(());
            });
        }
    }

    crate::impl_pipe!(Defer);

    #[test]
    fn blocks_until_a_remote_completion() {
        let result = sync_wait(Defer(Duration::from_millis(20)) | then(|()| "woke"));
        assert_eq!(result.unwrap(), Some("woke"));
    }
}
