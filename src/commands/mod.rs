use crate::core::context::CommandContext;
use crate::error::Result;
use async_trait::async_trait;

/// Base trait for all subcommands
#[async_trait]
pub trait SubCommand {
    type Args;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()>;
}

pub mod runner;

pub mod browse;
pub mod config;
pub mod cp;
pub mod ls;
pub mod mv;
pub mod pull;
pub mod push;
pub mod rename;
pub mod rm;
pub mod stat;

#[cfg(test)]
mod browse_test;
