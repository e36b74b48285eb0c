use crate::{
    pipe::AdaptorClosure,
    traits::{Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender},
    util::submit::{submit, SubmitReceiver},
};

/// On a value, the sender returned by `f` is connected to the downstream
/// receiver and started detached; errors and cancellations pass through
/// without invoking `f`.
pub const fn and_then<F>(f: F) -> AndThenFn<F> {
    AndThenFn(f)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AndThenFn<F>(F);

impl<S, F> AdaptorClosure<S> for AndThenFn<F>
where
    S: Sender,
{
    type Output = AndThen<S, F>;

    fn apply(self, sender: S) -> AndThen<S, F> {
        AndThen { sender, f: self.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AndThen<S, F> {
    sender: S,
    f: F,
}

impl<S: Sender, F> Sender for AndThen<S, F> {}

impl<S, F, Next> TypedSender for AndThen<S, F>
where
    S: TypedSender,
    F: FnOnce(S::Output) -> Next,
    Next: TypedSender,
    S::Error: Into<Next::Error>,
{
    type Output = Next::Output;
    type Error = Next::Error;

    const SENDS_DONE: bool = S::SENDS_DONE || Next::SENDS_DONE;
}

impl<S, F, R> SenderTo<R> for AndThen<S, F>
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

impl<F, R, T, Next> ReceiverOf<T> for Recv<F, R>
where
    F: FnOnce(T) -> Next,
    R: Receiver,
    Next: SenderTo<SubmitReceiver<R>>,
    <Next as SenderTo<SubmitReceiver<R>>>::Operation: Send + 'static,
{
    fn set_value(self, value: T) {
        submit((self.f)(value), self.receiver)
    }
}

crate::impl_pipe!(impl [S, F,] AndThen<S, F>);
crate::impl_compose!(impl [F,] AndThenFn<F>);
