use common::model::cu_tri::{ImportContext, RawVoterRow};

use super::validate::{validate_batch, BatchValidation};

/// Mutable preview list for one import session.
///
/// Owns the raw rows an organizer has entered or uploaded so far, bound to
/// the election and voting session the batch targets. Mutations never
/// validate; validation is an explicit, side-effect-free pass over the
/// current rows, so the preview can hold broken rows while the operator
/// fixes them.
pub struct BatchBuilder {
    ctx: ImportContext,
    rows: Vec<RawVoterRow>,
    last_upload_digest: Option<String>,
}

impl BatchBuilder {
    pub fn new(ctx: ImportContext) -> Self {
        BatchBuilder {
            ctx,
            rows: Vec::new(),
            last_upload_digest: None,
        }
    }

    pub fn context(&self) -> &ImportContext {
        &self.ctx
    }

    pub fn rows(&self) -> &[RawVoterRow] {
        &self.rows
    }

    pub fn add(&mut self, row: RawVoterRow) {
        self.rows.push(row);
    }

    pub fn extend(&mut self, rows: Vec<RawVoterRow>) {
        self.rows.extend(rows);
    }

    /// Replace the row at `index`. Returns false when the index is out of
    /// bounds.
    pub fn update(&mut self, index: usize, row: RawVoterRow) -> bool {
        match self.rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Remove the row at `index`. Returns false when the index is out of
    /// bounds.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.rows.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.last_upload_digest = None;
    }

    /// Record the fingerprint of an uploaded file. Returns true when it
    /// matches the previous upload, meaning the same file was sent twice and
    /// its rows should not be appended again.
    pub fn register_upload(&mut self, digest: &str) -> bool {
        if self.last_upload_digest.as_deref() == Some(digest) {
            return true;
        }
        self.last_upload_digest = Some(digest.to_string());
        false
    }

    pub fn validate(&self) -> BatchValidation {
        validate_batch(&self.rows, &self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> BatchBuilder {
        BatchBuilder::new(ImportContext {
            phien_bau_cu_id: 5,
            cuoc_bau_cu_id: 2,
        })
    }

    #[test]
    fn add_update_remove_clear() {
        let mut b = builder();
        b.add(RawVoterRow::with_email("a@x.com"));
        b.add(RawVoterRow::with_email("b@x.com"));
        assert_eq!(b.rows().len(), 2);

        assert!(b.update(1, RawVoterRow::with_email("c@x.com")));
        assert_eq!(b.rows()[1].email.as_deref(), Some("c@x.com"));
        assert!(!b.update(9, RawVoterRow::default()));

        assert!(b.remove(0));
        assert_eq!(b.rows().len(), 1);
        assert!(!b.remove(5));

        b.clear();
        assert!(b.rows().is_empty());
    }

    #[test]
    fn validate_uses_the_session_context() {
        let mut b = builder();
        b.add(RawVoterRow::with_email("a@x.com"));
        let result = b.validate();
        assert!(result.is_valid);
        assert_eq!(result.valid_data[0].phien_bau_cu_id, 5);
        assert_eq!(result.valid_data[0].cuoc_bau_cu_id, 2);
    }

    #[test]
    fn repeated_upload_digest_is_detected() {
        let mut b = builder();
        assert!(!b.register_upload("abc123"));
        assert!(b.register_upload("abc123"));
        assert!(!b.register_upload("def456"));
        // clearing the preview forgets the fingerprint
        b.clear();
        assert!(!b.register_upload("def456"));
    }
}
