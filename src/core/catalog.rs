//! Fixed catalog of resources for the Animal Crossings sample app
//!
//! Pure data assembly: one app, two routes with embedded validation schemas,
//! three client accounts with differing permission scopes. Field names and
//! shapes (`name`, `description`, `limit`, `docId`, `methods`, `schema`,
//! `permissions`, `superUser`) are dictated by the platform's API contract.
//! The schema documents are opaque blobs transmitted verbatim; the platform
//! validates submitted data against them, this tool never does.

use crate::core::resource::{ResourceDefinition, ResourceKind};
use crate::core::step::ProvisionStep;
use anyhow::Result;
use serde_json::json;
use std::collections::HashSet;

/// docId of the parent app; routes, clients, and key lookups are scoped to it
pub const APP_DOC_ID: &str = "animal_crossings";

/// The parent app object
pub fn app() -> ResourceDefinition {
    let payload = json!({
        "name": "Animal Crossings",
        "description": "The most cutting edge platform for tracking and celebrating animal sightings",
        "limit": 10000,
        "docId": APP_DOC_ID,
    });

    ResourceDefinition::new(ResourceKind::App, "", APP_DOC_ID, payload)
}

/// The locations route
pub fn locations_route() -> ResourceDefinition {
    let schema = json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "name": {
                "type": "string",
                "minLength": 5,
                "maxLength": 50
            },
            "description": {
                "type": "string",
                "minLength": 5,
                "maxLength": 200
            }
        },
        "required": [
            "name",
            "description"
        ]
    });

    let payload = json!({
        "name": "Locations",
        "description": "This route hosts a collection of locations where animal sightings may have taken place...",
        "methods": ["GET", "POST", "PUT", "DELETE"],
        "schema": schema,
        "docId": "locations",
    });

    ResourceDefinition::new(ResourceKind::Route, "routes", "locations", payload)
}

/// The sightings route; a sighting is a location, animal type, and time
pub fn sightings_route() -> ResourceDefinition {
    let schema = json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "location": {
                "type": "string",
                "minLength": 5,
                "maxLength": 50
            },
            "animal_type": {
                "type": "string",
                "enum": ["beaver", "seagull", "possum"]
            },
            "datetime": {
                "type": "object",
                "properties": {
                    "<iso>": {
                        "type": "string",
                        "format": "date-time"
                    }
                }
            }
        },
        "required": [
            "location",
            "animal_type",
            "datetime"
        ]
    });

    let payload = json!({
        "name": "Sightings",
        "description": "This route hosts a collection of animal sightings. A sighting represents a location, animal type, and time",
        "methods": ["GET", "POST", "PUT", "DELETE"],
        "schema": schema,
        "docId": "sightings",
    });

    ResourceDefinition::new(ResourceKind::Route, "routes", "sightings", payload)
}

/// Sally, the superUser account
pub fn sally_client() -> ResourceDefinition {
    let payload = json!({
        "name": "Sally",
        "superUser": true,
        "permissions": {
            "read": ["locations", "sightings"],
            "write": ["locations", "sightings"]
        },
        "docId": "sally",
    });

    ResourceDefinition::new(ResourceKind::Client, "clients", "sally", payload)
}

/// Jake, a regular read/write account
pub fn jake_client() -> ResourceDefinition {
    let payload = json!({
        "name": "Jake",
        "superUser": false,
        "permissions": {
            "read": ["locations", "sightings"],
            "write": ["locations", "sightings"]
        },
        "docId": "jake",
    });

    ResourceDefinition::new(ResourceKind::Client, "clients", "jake", payload)
}

/// Possums Incorporated, a read-only account on the sightings route
pub fn possums_inc_client() -> ResourceDefinition {
    let payload = json!({
        "name": "Possums Incorporated",
        "superUser": false,
        "permissions": {
            "read": ["sightings"],
            "write": []
        },
        "docId": "possums_inc",
    });

    ResourceDefinition::new(ResourceKind::Client, "clients", "possums_inc", payload)
}

/// The six provisioning steps, in execution order.
///
/// The app step comes first; everything after it is created under the app
/// identifier the caller configured.
///
/// Known limitation: re-running the pipeline may create duplicate resources
/// sharing a docId unless the platform itself enforces uniqueness.
pub fn provisioning_steps() -> Vec<ProvisionStep> {
    vec![
        ProvisionStep::new("building_the_app", app()),
        ProvisionStep::new("building_the_first_route", locations_route()),
        ProvisionStep::new("building_the_second_route", sightings_route()),
        ProvisionStep::new("adding_first_user", sally_client()),
        ProvisionStep::new("adding_second_user", jake_client()),
        ProvisionStep::new("adding_read_only_account", possums_inc_client()),
    ]
}

/// docIds of the client accounts whose keys the collector looks up
pub fn client_doc_ids() -> Vec<&'static str> {
    vec!["sally", "jake", "possums_inc"]
}

/// Validate a step list: unique step names, unique docIds per resource kind
pub fn validate(steps: &[ProvisionStep]) -> Result<()> {
    let mut seen_names = HashSet::new();
    for step in steps {
        if !seen_names.insert(&step.name) {
            anyhow::bail!("Duplicate step name: {}", step.name);
        }
    }

    let mut seen_doc_ids = HashSet::new();
    for step in steps {
        if !seen_doc_ids.insert((step.definition.kind, &step.definition.doc_id)) {
            anyhow::bail!(
                "Duplicate docId '{}' for {:?} resources",
                step.definition.doc_id,
                step.definition.kind
            );
        }
    }

    Ok(())
}
