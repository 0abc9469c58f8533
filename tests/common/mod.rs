#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use content_store::query_builder::SqlQuery;
use content_store::{Content, KeywordIndex, Page, QueryEngine, Result, Site};

/// Recording engine double: hands out canned results and keeps every query
/// it was asked to execute, so tests can assert round-trip counts and the
/// composed SQL.
#[derive(Default)]
pub struct MockEngine {
    uid_batches: Mutex<VecDeque<Vec<String>>>,
    contents: Mutex<Vec<Content>>,
    count: Mutex<i64>,
    recorded: Mutex<Vec<SqlQuery>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `fetch_uids` call.
    pub fn push_uid_batch(&self, uids: &[&str]) {
        self.uid_batches
            .lock()
            .unwrap()
            .push_back(uids.iter().map(|u| u.to_string()).collect());
    }

    pub fn set_contents(&self, contents: Vec<Content>) {
        *self.contents.lock().unwrap() = contents;
    }

    pub fn set_count(&self, count: i64) {
        *self.count.lock().unwrap() = count;
    }

    pub fn round_trips(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<SqlQuery> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryEngine for MockEngine {
    async fn fetch_uids(&self, query: &SqlQuery) -> Result<Vec<String>> {
        self.recorded.lock().unwrap().push(query.clone());
        Ok(self
            .uid_batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn fetch_contents(&self, query: &SqlQuery) -> Result<Vec<Content>> {
        self.recorded.lock().unwrap().push(query.clone());
        Ok(self.contents.lock().unwrap().clone())
    }

    async fn fetch_count(&self, query: &SqlQuery) -> Result<i64> {
        self.recorded.lock().unwrap().push(query.clone());
        Ok(*self.count.lock().unwrap())
    }
}

/// Keyword index double with a fixed resolution result.
pub struct MockKeywordIndex {
    uids: Vec<String>,
}

impl MockKeywordIndex {
    pub fn resolving(uids: &[&str]) -> Self {
        Self {
            uids: uids.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn resolving_nothing() -> Self {
        Self { uids: Vec::new() }
    }
}

#[async_trait]
impl KeywordIndex for MockKeywordIndex {
    async fn resolve(&self, _keywords: &[String]) -> Result<Vec<String>> {
        Ok(self.uids.clone())
    }
}

pub fn content(uid: &str, classname: &str) -> Content {
    let now = Utc::now().naive_utc();
    Content {
        uid: uid.to_string(),
        classname: classname.to_string(),
        label: None,
        parent_uid: None,
        node_uid: None,
        data: None,
        created_at: now,
        modified_at: now,
    }
}

pub fn site(uid: &str, label: &str) -> Site {
    Site {
        uid: uid.to_string(),
        label: label.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

pub fn page(uid: &str, parent: Option<&str>, left: i32, right: i32) -> Page {
    Page {
        uid: uid.to_string(),
        root_uid: "root".to_string(),
        parent_uid: parent.map(|p| p.to_string()),
        leftnode: left,
        rightnode: right,
        state: Page::STATE_ONLINE,
    }
}
