use sendex_core::{
    submit, AdaptorClosure, Receiver, ReceiverOf, ReceiverOfError, Scheduler, Sender, SenderTo,
    SubmitReceiver, TypedSender,
};

/// Starts the whole upstream chain on `scheduler`'s context instead of
/// the caller's.
pub const fn sched_on<Sched>(scheduler: Sched) -> SchedOnFn<Sched> {
    SchedOnFn(scheduler)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedOnFn<Sched>(Sched);

impl<S, Sched> AdaptorClosure<S> for SchedOnFn<Sched>
where
    S: Sender,
    Sched: Scheduler,
{
    type Output = SchedOn<S, Sched>;

    fn apply(self, sender: S) -> SchedOn<S, Sched> {
        SchedOn {
            sender,
            scheduler: self.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedOn<S, Sched> {
    sender: S,
    scheduler: Sched,
}

impl<S, Sched> Sender for SchedOn<S, Sched>
where
    S: Sender,
    Sched: Scheduler,
{
}

impl<S, Sched> TypedSender for SchedOn<S, Sched>
where
    S: TypedSender,
    Sched: Scheduler,
    <Sched::Task as TypedSender>::Error: Into<S::Error>,
{
    type Output = S::Output;
    type Error = S::Error;

    const SENDS_DONE: bool = S::SENDS_DONE || <Sched::Task as TypedSender>::SENDS_DONE;
}

impl<S, Sched, R> SenderTo<R> for SchedOn<S, Sched>
where
    Sched: Scheduler,
    Sched::Task: SenderTo<Recv<S, R>>,
    S: Sender,
{
    type Operation = <Sched::Task as SenderTo<Recv<S, R>>>::Operation;

    fn connect(self, receiver: R) -> Self::Operation {
        self.scheduler.schedule().connect(Recv {
            sender: self.sender,
            receiver,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recv<S, R> {
    sender: S,
    receiver: R,
}

impl<S, R> Receiver for Recv<S, R>
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

impl<S, R, E> ReceiverOfError<E> for Recv<S, R>
where
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        self.receiver.set_error(error)
    }
}

impl<S, R> ReceiverOf<()> for Recv<S, R>
where
    S: SenderTo<SubmitReceiver<R>>,
    <S as SenderTo<SubmitReceiver<R>>>::Operation: Send + 'static,
    R: Receiver,
{
    fn set_value(self, _value: ()) {
        submit(self.sender, self.receiver)
    }
}

sendex_core::impl_pipe!(impl [S, Sched,] SchedOn<S, Sched>);
sendex_core::impl_compose!(impl [Sched,] SchedOnFn<Sched>);
