//! Message-delivery client module

mod client;
mod traits;

pub use client::HttpMailer;
pub use traits::{deliver, MessageSender};

#[cfg(test)]
pub use traits::MockMessageSender;
