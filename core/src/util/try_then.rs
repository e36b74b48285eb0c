use core::marker::PhantomData;

use crate::{
    pipe::AdaptorClosure,
    traits::{Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender},
};

/// `Ok` continues on the value channel, `Err` is routed to `set_error`;
/// upstream errors convert into `f`'s error type with `Into`.
pub const fn try_then<F>(f: F) -> TryThenFn<F> {
    TryThenFn(f)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TryThenFn<F>(F);

impl<S, F> AdaptorClosure<S> for TryThenFn<F>
where
    S: Sender,
{
    type Output = TryThen<S, F>;

    fn apply(self, sender: S) -> TryThen<S, F> {
        TryThen { sender, f: self.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TryThen<S, F> {
    sender: S,
    f: F,
}

impl<S: Sender, F> Sender for TryThen<S, F> {}

impl<S, F, U, E> TypedSender for TryThen<S, F>
where
    S: TypedSender,
    S::Error: Into<E>,
    F: FnOnce(S::Output) -> Result<U, E>,
{
    type Output = U;
    type Error = E;

    const SENDS_DONE: bool = S::SENDS_DONE;
}

impl<S, F, U, E, R> SenderTo<R> for TryThen<S, F>
where
    S: TypedSender + SenderTo<Recv<F, R, E>>,
    F: FnOnce(S::Output) -> Result<U, E>,
{
    type Operation = <S as SenderTo<Recv<F, R, E>>>::Operation;

    fn connect(self, receiver: R) -> Self::Operation {
        self.sender.connect(Recv {
            f: self.f,
            receiver,
            marker: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Recv<F, R, E> {
    f: F,
    receiver: R,
    marker: PhantomData<E>,
}

impl<F, R, E> Receiver for Recv<F, R, E>
where
    R: Receiver,
{
    type Env = R::Env;

    fn env(&self) -> &R::Env {
        self.receiver.env()
    }

    fn set_done(self) {
        self.receiver.set_done()
    }
}

impl<F, R, E, Up> ReceiverOfError<Up> for Recv<F, R, E>
where
    Up: Into<E>,
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: Up) {
        self.receiver.set_error(error.into())
    }
}

impl<F, R, E, T, U> ReceiverOf<T> for Recv<F, R, E>
where
    F: FnOnce(T) -> Result<U, E>,
    R: ReceiverOf<U> + ReceiverOfError<E>,
{
    fn set_value(self, value: T) {
        match (self.f)(value) {
            Ok(value) => self.receiver.set_value(value),
            Err(error) => self.receiver.set_error(error),
        }
    }
}

crate::impl_pipe!(impl [S, F,] TryThen<S, F>);
crate::impl_compose!(impl [F,] TryThenFn<F>);
