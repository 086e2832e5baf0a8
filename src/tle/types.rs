//! TLE feed data types and worker communication structures

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// One feed triplet: the name line plus the TLE line pair, still unparsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TleSet {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

/// Commands for the feed worker thread
#[derive(Debug)]
pub enum FeedCommand {
    FetchFeed { url: String, cap: usize },
}

/// Results from the feed worker thread
#[derive(Debug)]
pub enum FeedResult {
    Loaded {
        sets: Vec<TleSet>,
        fetched_utc: DateTime<Utc>,
    },
    Failed {
        error: String,
    },
}

/// Resource containing channels for communicating with the feed worker thread
#[derive(Resource)]
pub struct FeedChannels {
    pub cmd_tx: Sender<FeedCommand>,
    pub res_rx: Arc<Mutex<Receiver<FeedResult>>>,
}

/// Load-session progress, shown in the status bar.
#[derive(Resource, Default)]
pub struct FeedStatus {
    pub requested: bool,
    pub loaded_utc: Option<DateTime<Utc>>,
}
