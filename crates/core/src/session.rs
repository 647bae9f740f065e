//! Caller-owned session context for interactive collaborators.
//!
//! Interactive front ends need to remember whether the user has entered the app and which
//! patient is currently loaded. That state belongs to the caller: it is held in a
//! `SessionContext` value the collaborator owns and passes around explicitly. The scoring engine
//! never reads or writes it.

use crate::assessment::Assessment;
use crate::patient::PatientFactors;
use chrono::{DateTime, Utc};

/// The patient currently loaded into a session, with the assessment shown for it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPatient {
    pub factors: PatientFactors,
    pub assessment: Assessment,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    entered: bool,
    current: Option<LoadedPatient>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session as having passed the landing page.
    pub fn enter(&mut self) {
        self.entered = true;
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Replaces the loaded patient and returns the previous one, if any.
    pub fn load(
        &mut self,
        factors: PatientFactors,
        assessment: Assessment,
    ) -> Option<LoadedPatient> {
        self.current.replace(LoadedPatient {
            factors,
            assessment,
            loaded_at: Utc::now(),
        })
    }

    pub fn current(&self) -> Option<&LoadedPatient> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) -> Option<LoadedPatient> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::assess;
    use crate::config::ScoringPolicy;
    use crate::patient::Gender;

    fn loaded(age: u32) -> (PatientFactors, Assessment) {
        let factors = PatientFactors::new(age, Gender::Female, 65.0);
        let assessment = assess(&factors, &ScoringPolicy::default());
        (factors, assessment)
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionContext::new();
        assert!(!session.has_entered());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_enter_sets_flag() {
        let mut session = SessionContext::new();
        session.enter();
        assert!(session.has_entered());
    }

    #[test]
    fn test_load_replaces_previous_patient() {
        let mut session = SessionContext::new();
        let (f1, a1) = loaded(40);
        let (f2, a2) = loaded(80);

        assert!(session.load(f1, a1).is_none());
        let previous = session.load(f2.clone(), a2).expect("first patient returned");
        assert_eq!(previous.factors.age, 40);
        assert_eq!(session.current().map(|p| &p.factors), Some(&f2));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = SessionContext::new();
        let b = SessionContext::new();
        let (f, s) = loaded(50);
        a.load(f, s);
        assert!(a.current().is_some());
        assert!(b.current().is_none());
    }

    #[test]
    fn test_clear_empties_slot() {
        let mut session = SessionContext::new();
        let (f, a) = loaded(50);
        session.load(f, a);
        assert!(session.clear().is_some());
        assert!(session.current().is_none());
    }
}
