//! Example schedulers; they exercise the contract, they are not
//! production executors.

use core::pin::Pin;

use sendex_core::{
    just, Just, OperationState, ReceiverOf, ReceiverOfError, Scheduler, Sender, SenderTo,
    TypedSender,
};
use std::{
    io,
    sync::{Arc, Mutex},
    thread,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    type Task = Just<()>;

    fn schedule(&self) -> Just<()> {
        just(())
    }
}

/// One spawned thread per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    type Task = Spawn;

    fn schedule(&self) -> Spawn {
        Spawn
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to spawn a worker thread")]
pub struct SpawnError(#[from] io::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spawn;

impl Sender for Spawn {}

impl TypedSender for Spawn {
    type Output = ();
    type Error = SpawnError;

    const SENDS_DONE: bool = false;
}

impl<R> SenderTo<R> for Spawn
where
    R: ReceiverOf<()> + ReceiverOfError<SpawnError> + Send + 'static,
{
    type Operation = SpawnOp<R>;

    fn connect(self, receiver: R) -> SpawnOp<R> {
        SpawnOp(Some(receiver))
    }
}

pub struct SpawnOp<R>(Option<R>);

impl<R> Unpin for SpawnOp<R> {}

impl<R> OperationState for SpawnOp<R>
where
    R: ReceiverOf<()> + ReceiverOfError<SpawnError> + Send + 'static,
{
    fn start(self: Pin<&mut Self>) {
        let receiver = self.get_mut().0.take().expect("operation already started");
        // The receiver has to survive a failed spawn, so it rides in a
        // shared slot rather than in the closure's captures.
        let slot = Arc::new(Mutex::new(Some(receiver)));
        let remote = slot.clone();
        let spawned = thread::Builder::new()
            .name("sendex-worker".into())
            .spawn(move || {
                if let Some(receiver) = remote.lock().expect("worker slot poisoned").take() {
                    receiver.set_value(());
                }
            });
        if let Err(error) = spawned {
            if let Some(receiver) = slot.lock().expect("worker slot poisoned").take() {
                receiver.set_error(SpawnError::from(error));
            }
        }
    }
}

sendex_core::impl_pipe!(Spawn);

#[cfg(test)]
mod tests {
    use std::thread;

    use sendex_core::{schedule, sync_wait, then};

    use super::*;
    use crate::SenderExt;

    #[test]
    fn inline_scheduler_runs_on_the_calling_thread() {
        let here = thread::current().id();
        let result = sync_wait(schedule(InlineScheduler) | then(move |()| thread::current().id()));
        assert_eq!(result.unwrap(), Some(here));
    }

    #[test]
    fn schedulers_compare_by_context() {
        assert_eq!(InlineScheduler, InlineScheduler);
        assert_eq!(ThreadScheduler, ThreadScheduler);
    }

    #[test]
    fn thread_scheduler_runs_elsewhere() {
        let here = thread::current().id();
        let result = sync_wait(schedule(ThreadScheduler) | then(move |()| thread::current().id()));
        let there = result.unwrap().unwrap();
        assert_ne!(there, here);
    }

    #[test]
    fn transfer_moves_the_completion_context() {
        let here = thread::current().id();
        let result = sync_wait(
            sendex_core::just(17)
                .transfer(ThreadScheduler)
                .then(move |x: i32| (x, thread::current().id() == here)),
        );
        assert_eq!(result.unwrap(), Some((17, false)));
    }

    #[test]
    fn sched_on_starts_the_chain_elsewhere() {
        let here = thread::current().id();
        let result = sync_wait(
            sendex_core::just(())
                .then(move |()| thread::current().id() == here)
                .sched_on(ThreadScheduler),
        );
        assert_eq!(result.unwrap(), Some(false));
    }

    #[test]
    fn scheduler_query_feeds_a_nested_schedule() {
        use sendex_core::{
            get_scheduler, Environment, NeverStopToken, ProvidesScheduler, Receiver,
        };

        struct SchedEnv(InlineScheduler);

        impl Environment for SchedEnv {
            type StopToken = NeverStopToken;

            fn stop_token(&self) -> NeverStopToken {
                NeverStopToken
            }
        }

        impl ProvidesScheduler for SchedEnv {
            type Scheduler = InlineScheduler;

            fn scheduler(&self) -> InlineScheduler {
                self.0
            }
        }

        struct Hosted(SchedEnv);

        impl Receiver for Hosted {
            type Env = SchedEnv;

            fn env(&self) -> &SchedEnv {
                &self.0
            }

            fn set_done(self) {}
        }

        let receiver = Hosted(SchedEnv(InlineScheduler));
        let nested = get_scheduler(&receiver);
        let result = sync_wait(schedule(nested) | then(|()| "ran"));
        assert_eq!(result.unwrap(), Some("ran"));
    }

    #[test]
    fn execute_fires_a_closure_on_the_scheduler() {
        let (tx, rx) = std::sync::mpsc::channel();
        sendex_core::execute(ThreadScheduler, move || {
            let _ = tx.send(thread::current().id());
        });
        let worker = rx.recv().unwrap();
        assert_ne!(worker, thread::current().id());
    }
}
