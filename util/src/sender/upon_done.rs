use sendex_core::{
    AdaptorClosure, Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender,
};

/// `f()` supplies the value completion when the upstream signals done.
pub const fn upon_done<F>(f: F) -> UponDoneFn<F> {
    UponDoneFn(f)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UponDoneFn<F>(F);

impl<S, F> AdaptorClosure<S> for UponDoneFn<F>
where
    S: Sender,
{
    type Output = UponDone<S, F>;

    fn apply(self, sender: S) -> UponDone<S, F> {
        UponDone { sender, f: self.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UponDone<S, F> {
    sender: S,
    f: F,
}

impl<S: Sender, F> Sender for UponDone<S, F> {}

impl<S, F, U> TypedSender for UponDone<S, F>
where
    S: TypedSender,
    F: FnOnce() -> U,
{
    type Output = U;
    type Error = S::Error;

    const SENDS_DONE: bool = false;
}

impl<S, F, R> SenderTo<R> for UponDone<S, F>
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

impl<F, R, U> Receiver for Recv<F, R>
where
    F: FnOnce() -> U,
    R: ReceiverOf<U>,
{
    type Env = R::Env;

    fn env(&self) -> &R::Env {
        self.receiver.env()
    }

    fn set_done(self) {
        self.receiver.set_value((self.f)())
    }
}

impl<F, R, U, E> ReceiverOfError<E> for Recv<F, R>
where
    F: FnOnce() -> U,
    R: ReceiverOf<U> + ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        self.receiver.set_error(error)
    }
}

impl<F, R, U, T> ReceiverOf<T> for Recv<F, R>
where
    F: FnOnce() -> U,
    R: ReceiverOf<U> + ReceiverOf<T>,
{
    fn set_value(self, value: T) {
        self.receiver.set_value(value)
    }
}

sendex_core::impl_pipe!(impl [S, F,] UponDone<S, F>);
sendex_core::impl_compose!(impl [F,] UponDoneFn<F>);
