use core::{convert::Infallible, pin::Pin};

use super::STARTED_TWICE;
use crate::{
    traits::{OperationState, Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender},
    BoxError,
};

pub const fn just<T>(values: T) -> Just<T> {
    Just(values)
}

pub const fn just_error<E>(error: E) -> JustError<E> {
    JustError(error)
}

pub const fn just_done() -> JustDone {
    JustDone
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Just<T>(T);

impl<T> Sender for Just<T> {}

impl<T> TypedSender for Just<T> {
    type Output = T;
    type Error = BoxError;

    const SENDS_DONE: bool = false;
}

impl<T, R> SenderTo<R> for Just<T>
where
    R: ReceiverOf<T>,
{
    type Operation = JustOp<T, R>;

    fn connect(self, receiver: R) -> JustOp<T, R> {
        JustOp(Some((self.0, receiver)))
    }
}

pub struct JustOp<T, R>(Option<(T, R)>);

impl<T, R> Unpin for JustOp<T, R> {}

impl<T, R> OperationState for JustOp<T, R>
where
    R: ReceiverOf<T>,
{
    fn start(self: Pin<&mut Self>) {
        let (values, receiver) = self.get_mut().0.take().expect(STARTED_TWICE);
        receiver.set_value(values);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JustError<E>(E);

impl<E> Sender for JustError<E> {}

impl<E> TypedSender for JustError<E> {
    type Output = Infallible;
    type Error = E;

    const SENDS_DONE: bool = false;
}

impl<E, R> SenderTo<R> for JustError<E>
where
    R: ReceiverOfError<E>,
{
    type Operation = JustErrorOp<E, R>;

    fn connect(self, receiver: R) -> JustErrorOp<E, R> {
        JustErrorOp(Some((self.0, receiver)))
    }
}

pub struct JustErrorOp<E, R>(Option<(E, R)>);

impl<E, R> Unpin for JustErrorOp<E, R> {}

impl<E, R> OperationState for JustErrorOp<E, R>
where
    R: ReceiverOfError<E>,
{
    fn start(self: Pin<&mut Self>) {
        let (error, receiver) = self.get_mut().0.take().expect(STARTED_TWICE);
        receiver.set_error(error);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JustDone;

impl Sender for JustDone {}

impl TypedSender for JustDone {
    type Output = Infallible;
    type Error = Infallible;

    const SENDS_DONE: bool = true;
}

impl<R> SenderTo<R> for JustDone
where
    R: Receiver,
{
    type Operation = JustDoneOp<R>;

    fn connect(self, receiver: R) -> JustDoneOp<R> {
        JustDoneOp(Some(receiver))
    }
}

pub struct JustDoneOp<R>(Option<R>);

impl<R> Unpin for JustDoneOp<R> {}

impl<R> OperationState for JustDoneOp<R>
where
    R: Receiver,
{
    fn start(self: Pin<&mut Self>) {
        let receiver = self.get_mut().0.take().expect(STARTED_TWICE);
        receiver.set_done();
    }
}

crate::impl_pipe!(impl [T,] Just<T>);
crate::impl_pipe!(impl [E,] JustError<E>);
crate::impl_pipe!(JustDone);

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{
        pin::pin,
        sync::{
            atomic::{AtomicU8, Ordering::SeqCst},
            Arc,
        },
    };

    use super::*;
    use crate::traits::OperationState;

    struct Sink(Arc<AtomicU8>);

    impl Receiver for Sink {
        type Env = ();

        fn env(&self) -> &() {
            &()
        }

        fn set_done(self) {
            self.0.fetch_add(1, SeqCst);
        }
    }

    impl<T> ReceiverOf<T> for Sink {
        fn set_value(self, _value: T) {
            self.0.fetch_add(1, SeqCst);
        }
    }

    #[test]
    #[should_panic = "operation already started"]
    fn starting_twice_panics() {
        let fired = Arc::new(AtomicU8::new(0));
        let mut op = pin!(just(1).connect(Sink(fired)));
        op.as_mut().start();
        op.as_mut().start();
    }
}
