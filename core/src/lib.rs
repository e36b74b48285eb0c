#![no_std]

mod adaptor;
mod env;
mod pipe;
mod stop;
mod traits;
pub mod util;

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// The erased error handle every chain can fall back to.
#[cfg(feature = "alloc")]
pub type BoxError = alloc::boxed::Box<dyn core::error::Error + Send + Sync>;

#[cfg(feature = "alloc")]
pub use self::stop::{SharedStopToken, StopSource};
#[cfg(feature = "alloc")]
pub use self::util::{
    and_then, execute, from_future, just, just_done, just_error, submit, AndThen, AndThenFn,
    AsReceiver, FromFuture, Just, JustDone, JustError, SubmitReceiver,
};
#[cfg(feature = "std")]
pub use self::util::{sync_wait, wait, WaitRecv};
pub use self::{
    adaptor::Forward,
    env::{
        get_allocator, get_scheduler, get_stop_token, Environment, ProvidesAllocator,
        ProvidesScheduler, StopEnv,
    },
    pipe::{AdaptorClosure, Composed},
    stop::{NeverStopToken, StopToken},
    traits::{
        ConnectOp, OperationState, Receiver, ReceiverOf, ReceiverOfError, Scheduler, Sender,
        SenderOf, SenderTo, Signal, TypedSender,
    },
    util::{
        schedule, then, try_then, write_env, EitherOp, Schedule, Then, ThenFn, TryThen, TryThenFn,
        WriteEnv, WriteEnvFn,
    },
};
