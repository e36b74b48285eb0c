use crate::traits::{Scheduler, Sender, SenderTo, TypedSender};

pub const fn schedule<Sch: Scheduler>(scheduler: Sch) -> Schedule<Sch> {
    Schedule(scheduler)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule<Sch>(Sch);

impl<Sch: Scheduler> Sender for Schedule<Sch> {}

impl<Sch: Scheduler> TypedSender for Schedule<Sch> {
    type Output = ();
    type Error = <Sch::Task as TypedSender>::Error;

    const SENDS_DONE: bool = <Sch::Task as TypedSender>::SENDS_DONE;
}

impl<Sch, R> SenderTo<R> for Schedule<Sch>
where
    Sch: Scheduler,
    Sch::Task: SenderTo<R>,
{
    type Operation = <Sch::Task as SenderTo<R>>::Operation;

    fn connect(self, receiver: R) -> Self::Operation {
        self.0.schedule().connect(receiver)
    }
}

crate::impl_pipe!(impl [Sch,] Schedule<Sch>);
