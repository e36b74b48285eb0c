use sendex_core::{
    submit, AdaptorClosure, Receiver, ReceiverOf, ReceiverOfError, Scheduler, Sender, SenderTo,
    SubmitReceiver, TypedSender,
};

/// Hops the value completion onto `scheduler`'s context; errors and
/// cancellations complete inline.
pub const fn transfer<Sched>(scheduler: Sched) -> TransferFn<Sched> {
    TransferFn(scheduler)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferFn<Sched>(Sched);

impl<S, Sched> AdaptorClosure<S> for TransferFn<Sched>
where
    S: Sender,
    Sched: Scheduler,
{
    type Output = Transfer<S, Sched>;

    fn apply(self, sender: S) -> Transfer<S, Sched> {
        Transfer {
            sender,
            scheduler: self.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer<S, Sched> {
    sender: S,
    scheduler: Sched,
}

impl<S, Sched> Sender for Transfer<S, Sched>
where
    S: Sender,
    Sched: Scheduler,
{
}

impl<S, Sched> TypedSender for Transfer<S, Sched>
where
    S: TypedSender,
    Sched: Scheduler,
    <Sched::Task as TypedSender>::Error: Into<S::Error>,
{
    type Output = S::Output;
    type Error = S::Error;

    const SENDS_DONE: bool = S::SENDS_DONE || <Sched::Task as TypedSender>::SENDS_DONE;
}

impl<S, Sched, R> SenderTo<R> for Transfer<S, Sched>
where
    S: SenderTo<Local<R, Sched>>,
    Sched: Scheduler,
{
    type Operation = S::Operation;

    fn connect(self, receiver: R) -> S::Operation {
        self.sender.connect(Local {
            receiver,
            scheduler: self.scheduler,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Local<R, Sched> {
    receiver: R,
    scheduler: Sched,
}

impl<R, Sched> Receiver for Local<R, Sched>
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

impl<R, Sched, E> ReceiverOfError<E> for Local<R, Sched>
where
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        self.receiver.set_error(error)
    }
}

impl<R, Sched, T> ReceiverOf<T> for Local<R, Sched>
where
    Sched: Scheduler,
    Sched::Task: SenderTo<SubmitReceiver<Remote<R, T>>>,
    <Sched::Task as SenderTo<SubmitReceiver<Remote<R, T>>>>::Operation: Send + 'static,
    R: ReceiverOf<T>,
{
    fn set_value(self, value: T) {
        let remote = Remote {
            receiver: self.receiver,
            value,
        };
        submit(self.scheduler.schedule(), remote)
    }
}

// Carries the value across the context switch.
struct Remote<R, T> {
    receiver: R,
    value: T,
}

impl<R, T> Receiver for Remote<R, T>
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

impl<R, T, E> ReceiverOfError<E> for Remote<R, T>
where
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        self.receiver.set_error(error)
    }
}

impl<R, T> ReceiverOf<()> for Remote<R, T>
where
    R: ReceiverOf<T>,
{
    fn set_value(self, _value: ()) {
        self.receiver.set_value(self.value)
    }
}

sendex_core::impl_pipe!(impl [S, Sched,] Transfer<S, Sched>);
sendex_core::impl_compose!(impl [Sched,] TransferFn<Sched>);
