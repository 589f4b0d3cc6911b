//! Portable dashboard logic: identifier parsing, the render tree, the HTTP
//! client, and the poll loop. Nothing in here touches the DOM.

pub mod client;
pub mod listing;
pub mod poller;
pub mod report;
pub mod timing;
