use sendex_core::{
    AdaptorClosure, Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender,
};

/// `f` turns an upstream error into an ordinary value completion.
pub const fn upon_error<F>(f: F) -> UponErrorFn<F> {
    UponErrorFn(f)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UponErrorFn<F>(F);

impl<S, F> AdaptorClosure<S> for UponErrorFn<F>
where
    S: Sender,
{
    type Output = UponError<S, F>;

    fn apply(self, sender: S) -> UponError<S, F> {
        UponError { sender, f: self.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UponError<S, F> {
    sender: S,
    f: F,
}

impl<S: Sender, F> Sender for UponError<S, F> {}

impl<S, F, U> TypedSender for UponError<S, F>
where
    S: TypedSender,
    F: FnOnce(S::Error) -> U,
{
    type Output = U;
    type Error = core::convert::Infallible;

    const SENDS_DONE: bool = S::SENDS_DONE;
}

impl<S, F, R> SenderTo<R> for UponError<S, F>
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

impl<F, R, E, U> ReceiverOfError<E> for Recv<F, R>
where
    F: FnOnce(E) -> U,
    R: ReceiverOf<U>,
{
    fn set_error(self, error: E) {
        self.receiver.set_value((self.f)(error))
    }
}

impl<F, R, T> ReceiverOf<T> for Recv<F, R>
where
    R: ReceiverOf<T>,
{
    fn set_value(self, value: T) {
        self.receiver.set_value(value)
    }
}

sendex_core::impl_pipe!(impl [S, F,] UponError<S, F>);
sendex_core::impl_compose!(impl [F,] UponErrorFn<F>);
