//! Domains command implementation
//!
//! Prints every exam domain with its vocabularies, default marks and time
//! allowances.

use clap::Args;

use crate::cli::exit_code;
use crate::domain::{ExamDomain, TypeSpec, VocabularyKind};

/// Arguments for the domains command
#[derive(Args, Debug)]
pub struct DomainsArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl DomainsArgs {
    /// Execute the domains command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&domains_json())?);
        } else {
            print!("{}", render_table());
        }
        Ok(exit_code::OK)
    }
}

fn render_vocabulary(out: &mut String, kind: VocabularyKind, specs: &[TypeSpec]) {
    out.push_str(&format!("  {kind} vocabulary:\n"));
    for spec in specs {
        out.push_str(&format!(
            "    {:<18} {:<28} {:>3} marks  {:>4} min\n",
            spec.code, spec.label, spec.default_marks, spec.minutes_per_question
        ));
    }
}

fn render_table() -> String {
    let mut out = String::new();
    for domain in ExamDomain::ALL {
        out.push_str(&format!("📚 {domain}\n"));
        let profile = domain.profile();
        render_vocabulary(
            &mut out,
            VocabularyKind::Generic,
            profile.vocabulary(VocabularyKind::Generic),
        );
        if domain.has_domain_vocabulary() {
            render_vocabulary(
                &mut out,
                VocabularyKind::DomainSpecific,
                profile.vocabulary(VocabularyKind::DomainSpecific),
            );
        }
        out.push('\n');
    }
    out
}

fn domains_json() -> serde_json::Value {
    let entries: Vec<serde_json::Value> = ExamDomain::ALL
        .iter()
        .map(|domain| {
            let profile = domain.profile();
            serde_json::json!({
                "domain": domain.as_str(),
                "generic": profile.vocabulary(VocabularyKind::Generic),
                "domain_specific": profile.vocabulary(VocabularyKind::DomainSpecific),
            })
        })
        .collect();
    serde_json::Value::Array(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_domain() {
        let table = render_table();
        for domain in ExamDomain::ALL {
            assert!(table.contains(domain.as_str()));
        }
        assert!(table.contains("single_correct"));
        assert!(table.contains("matrix_match"));
    }

    #[test]
    fn test_json_shape() {
        let value = domains_json();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), ExamDomain::ALL.len());

        let general = entries.iter().find(|e| e["domain"] == "general").unwrap();
        assert!(general["domain_specific"].as_array().unwrap().is_empty());
        assert_eq!(general["generic"].as_array().unwrap().len(), 5);
    }
}
