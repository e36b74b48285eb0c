use core::fmt::Debug;

use crate::{
    traits::{Receiver, ReceiverOf, ReceiverOfError, Scheduler, SenderTo},
    util::{
        schedule::{schedule, Schedule},
        submit::{submit, SubmitReceiver},
    },
};

pub fn execute<Sch, F>(scheduler: Sch, f: F)
where
    Sch: Scheduler,
    F: FnOnce(),
    Schedule<Sch>: SenderTo<SubmitReceiver<AsReceiver<F>>>,
    <Schedule<Sch> as SenderTo<SubmitReceiver<AsReceiver<F>>>>::Operation: Send + 'static,
{
    submit(schedule(scheduler), AsReceiver(f))
}

/// The value channel runs the function, cancellation discards it, and an
/// error from the scheduler below is a bug and panics.
pub struct AsReceiver<F>(pub F);

impl<F> Receiver for AsReceiver<F> {
    type Env = ();

    fn env(&self) -> &() {
        &()
    }

    fn set_done(self) {}
}

impl<F, E: Debug> ReceiverOfError<E> for AsReceiver<F> {
    fn set_error(self, error: E) {
        panic!("execute: the scheduler failed: {error:?}");
    }
}

impl<F: FnOnce()> ReceiverOf<()> for AsReceiver<F> {
    fn set_value(self, _value: ()) {
        (self.0)()
    }
}
