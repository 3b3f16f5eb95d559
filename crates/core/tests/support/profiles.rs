use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use inferno_core::ProfileSource;
use inferno_domain::{InfernoError, Profile, Result};

/// Profiles named after `names`, each with a fresh id
pub fn named(names: &[&str]) -> Vec<Profile> {
    names.iter().map(|name| Profile::new(*name, 28)).collect()
}

/// One scripted response from [`ScriptedSource`]
pub enum Step {
    Batch(Vec<Profile>),
    Fail(&'static str),
}

/// Profile source that replays scripted responses, then falls back to
/// generating `count` fresh profiles per call.
#[derive(Default)]
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self { steps: Mutex::new(steps.into()), calls: AtomicUsize::new(0) })
    }

    pub fn unlimited() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProfileSource for ScriptedSource {
    fn generate(&self, count: usize) -> Result<Vec<Profile>> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.steps.lock().expect("script mutex poisoned").pop_front() {
            Some(Step::Batch(batch)) => Ok(batch),
            Some(Step::Fail(reason)) => Err(InfernoError::ProfileSource(reason.into())),
            None => Ok((0..count).map(|i| Profile::new(format!("gen-{index}-{i}"), 30)).collect()),
        }
    }
}
