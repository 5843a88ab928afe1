//! Batch exam generation.
//!
//! Ties the pipeline together: load the item bank, shuffle one variant per
//! requested version, render, and write the artifacts. Each version is an
//! independent draw from the same bank; nothing is shared between calls
//! beyond the injected RNG.

mod pipeline;

pub use pipeline::{
    GenerateRequest, GenerateResponse, VersionResult, generate_exams, generate_exams_with,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes() {
        let request = GenerateRequest::new("bank.xlsx", "out", "exam")
            .with_versions(2)
            .with_text(true);
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: GenerateRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round.output_name, "exam");
        assert_eq!(round.versions, 2);
        assert!(round.emit_text);
    }
}
