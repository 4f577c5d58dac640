use serde::Serialize;
use tracing::debug;

use notebook::extract::{self, Section};
use notebook::{Notebook, Patterns};

use crate::config::ValidatorConfig;
use crate::error::ConfigError;
use crate::passes::{
    FlowResult, LinkResult, ProductionResult, StructureResult, TransitionResult,
    validate_part_flow, validate_production, validate_smart_links, validate_structure,
    validate_transitions,
};
use crate::result::{PassName, Status};
use crate::score::{self, Rating};

/// Runs the checks for one configuration.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    patterns: Patterns,
}

/// Results of a validation run, one slot per pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub total_cells: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_links: Option<LinkResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<StructureResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TransitionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_flow: Option<FlowResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionResult>,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        let patterns = Patterns::new(&config.decorative_symbols)?;
        Ok(Validator { config, patterns })
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Run all five passes.
    pub fn run(&self, notebook: &Notebook) -> ValidationReport {
        let sections = extract::sections(notebook, &self.patterns);
        let report = ValidationReport {
            total_cells: notebook.len(),
            smart_links: Some(self.check_smart_links(notebook)),
            structure: Some(self.check_structure(&sections, notebook.len())),
            transitions: Some(self.check_transitions(notebook)),
            part_flow: Some(validate_part_flow(&sections)),
            production: Some(self.check_production(notebook)),
        };

        for (pass, status, score) in report.pass_summaries() {
            debug!(pass = pass.key(), %status, score, "pass complete");
        }
        report
    }

    pub fn check_smart_links(&self, notebook: &Notebook) -> LinkResult {
        let links = extract::smart_links(notebook, &self.patterns);
        let headings = extract::headings(notebook, &self.patterns);
        validate_smart_links(&links, &headings, &self.patterns)
    }

    pub fn check_structure(&self, sections: &[Section], total_cells: usize) -> StructureResult {
        validate_structure(sections, total_cells, &self.config)
    }

    pub fn check_transitions(&self, notebook: &Notebook) -> TransitionResult {
        let transitions = extract::transition_cells(notebook, &self.patterns);
        debug!(found = transitions.len(), "transition cells");
        validate_transitions(transitions, self.config.require_transitions)
    }

    pub fn check_part_flow(&self, notebook: &Notebook) -> FlowResult {
        validate_part_flow(&extract::sections(notebook, &self.patterns))
    }

    pub fn check_production(&self, notebook: &Notebook) -> ProductionResult {
        validate_production(
            &notebook.metadata,
            &self.config.required_metadata,
            notebook.stored_size,
        )
    }
}

impl ValidationReport {
    /// Status and score of every pass that ran, in report order.
    pub fn pass_summaries(&self) -> Vec<(PassName, Status, u8)> {
        PassName::ALL
            .into_iter()
            .filter_map(|pass| self.summary(pass).map(|(status, score)| (pass, status, score)))
            .collect()
    }

    pub fn summary(&self, pass: PassName) -> Option<(Status, u8)> {
        match pass {
            PassName::SmartLinks => self.smart_links.as_ref().map(|r| (r.status, r.score)),
            PassName::Structure => self.structure.as_ref().map(|r| (r.status, r.score)),
            PassName::Transitions => self.transitions.as_ref().map(|r| (r.status, r.score)),
            PassName::PartFlow => self.part_flow.as_ref().map(|r| (r.status, r.score)),
            PassName::Production => self.production.as_ref().map(|r| (r.status, r.score)),
        }
    }

    pub fn overall_score(&self) -> u8 {
        score::overall_score(
            self.pass_summaries()
                .into_iter()
                .map(|(pass, _, score)| (pass, score)),
        )
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.overall_score())
    }

    pub fn is_production_ready(&self) -> bool {
        self.overall_score() >= score::PRODUCTION_READY
    }
}
