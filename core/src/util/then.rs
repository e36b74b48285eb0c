use crate::{
    pipe::AdaptorClosure,
    traits::{Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender},
};

pub const fn then<F>(f: F) -> ThenFn<F> {
    ThenFn(f)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThenFn<F>(F);

impl<S, F> AdaptorClosure<S> for ThenFn<F>
where
    S: Sender,
{
    type Output = Then<S, F>;

    fn apply(self, sender: S) -> Then<S, F> {
        Then { sender, f: self.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Then<S, F> {
    sender: S,
    f: F,
}

impl<S: Sender, F> Sender for Then<S, F> {}

impl<S, F, U> TypedSender for Then<S, F>
where
    S: TypedSender,
    F: FnOnce(S::Output) -> U,
{
    type Output = U;
    type Error = S::Error;

    const SENDS_DONE: bool = S::SENDS_DONE;
}

impl<S, F, R> SenderTo<R> for Then<S, F>
where
    S: SenderTo<Recv<F, R>>,
{
    type Operation = S::Operation;

    fn connect(self, receiver: R) -> S::Operation {
        self.sender.connect(Recv { f: self.f, receiver })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Recv<F, R> {
    f: F,
    receiver: R,
}

impl<F, R> Receiver for Recv<F, R>
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

impl<F, R, E> ReceiverOfError<E> for Recv<F, R>
where
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        self.receiver.set_error(error)
    }
}

impl<F, R, T, U> ReceiverOf<T> for Recv<F, R>
where
    F: FnOnce(T) -> U,
    R: ReceiverOf<U>,
{
    fn set_value(self, value: T) {
        self.receiver.set_value((self.f)(value))
    }
}

crate::impl_pipe!(impl [S, F,] Then<S, F>);
crate::impl_compose!(impl [F,] ThenFn<F>);
