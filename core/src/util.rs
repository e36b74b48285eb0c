#[cfg(feature = "alloc")]
mod and_then;
mod either;
#[cfg(feature = "alloc")]
mod execute;
#[cfg(feature = "alloc")]
mod future;
#[cfg(feature = "alloc")]
mod just;
mod schedule;
#[cfg(feature = "alloc")]
mod submit;
mod then;
mod try_then;
#[cfg(feature = "std")]
mod wait;
mod write_env;

#[cfg(feature = "alloc")]
pub use self::{
    and_then::{and_then, AndThen, AndThenFn},
    execute::{execute, AsReceiver},
    future::{from_future, FromFuture},
    just::{just, just_done, just_error, Just, JustDone, JustError},
    submit::{submit, SubmitReceiver},
};
#[cfg(feature = "std")]
pub use self::wait::{sync_wait, wait, WaitRecv};
pub use self::{
    either::EitherOp,
    schedule::{schedule, Schedule},
    then::{then, Then, ThenFn},
    try_then::{try_then, TryThen, TryThenFn},
    write_env::{write_env, WriteEnv, WriteEnvFn},
};

#[cfg(feature = "alloc")]
const STARTED_TWICE: &str = "operation already started";
