#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use subport_lib::{Error, RemoteSession, Result};

/// Scripted in-memory session. Records every subscribe attempt in order and
/// fails the names registered with [`FakeSession::fail`].
#[derive(Default)]
pub struct FakeSession {
    listing: Vec<String>,
    listing_error: Option<String>,
    failures: HashMap<String, String>,
    attempts: RefCell<Vec<String>>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(names: &[&str]) -> Self {
        Self {
            listing: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_listing(message: &str) -> Self {
        Self {
            listing_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn fail(mut self, name: &str, message: &str) -> Self {
        self.failures.insert(name.to_string(), message.to_string());
        self
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }
}

impl RemoteSession for FakeSession {
    fn subscribed_communities(&self) -> Result<Vec<String>> {
        match &self.listing_error {
            Some(message) => Err(Error::Api {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(self.listing.clone()),
        }
    }

    fn subscribe(&self, name: &str) -> Result<()> {
        self.attempts.borrow_mut().push(name.to_string());
        match self.failures.get(name) {
            Some(message) => Err(Error::Api {
                status: 404,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

pub fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|n| n.to_string()).collect()
}
