//! # Formulation
//!
//! How components and services were built: workflows, their tasks and the
//! steps and commands those ran.
use chrono::{DateTime, Utc};

use super::{Component, Property, Service};
use crate::bind::macros::{entity, wire_enum};
use crate::schema::FieldDescriptor as Field;

wire_enum! {
    /// Task Type
    pub enum TaskType {
        /// Copy
        Copy => "copy",
        /// Clone
        Clone => "clone",
        /// Lint
        Lint => "lint",
        /// Scan
        Scan => "scan",
        /// Merge
        Merge => "merge",
        /// Build
        Build => "build",
        /// Test
        Test => "test",
        /// Deliver
        Deliver => "deliver",
        /// Deploy
        Deploy => "deploy",
        /// Release
        Release => "release",
        /// Clean
        Clean => "clean",
        /// Other
        Other => "other",
    }
}

entity! {
    /// Formula describing how a set of components and services was produced
    pub struct Formula {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Components used by the formula
        components: Vec<Component> => 1, Field::new("components").wrapped("components", "component"),
        /// Services used by the formula
        services: Vec<Service> => 2, Field::new("services").wrapped("services", "service"),
        /// Workflows
        workflows: Vec<Workflow> => 3, Field::new("workflows").wrapped("workflows", "workflow"),
        /// Properties
        properties: Vec<Property> => 4, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Workflow
    pub struct Workflow {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Unique identifier
        uid: Option<String> => 1, Field::new("uid"),
        /// Name
        name: Option<String> => 2, Field::new("name"),
        /// Description
        description: Option<String> => 3, Field::new("description"),
        /// Tasks
        tasks: Vec<Task> => 4, Field::new("tasks").wrapped("tasks", "task"),
        /// Task types
        task_types: Vec<TaskType> => 5, Field::new("taskTypes").wrapped("taskTypes", "taskType"),
        /// Steps
        steps: Vec<Step> => 6, Field::new("steps").wrapped("steps", "step"),
        /// Start time
        time_start: Option<DateTime<Utc>> => 7, Field::new("timeStart"),
        /// End time
        time_end: Option<DateTime<Utc>> => 8, Field::new("timeEnd"),
        /// Properties
        properties: Vec<Property> => 9, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Task of a workflow
    pub struct Task {
        /// BOM reference
        bom_ref: Option<String> => 0, Field::new("bom-ref").attribute(),
        /// Unique identifier
        uid: Option<String> => 1, Field::new("uid"),
        /// Name
        name: Option<String> => 2, Field::new("name"),
        /// Description
        description: Option<String> => 3, Field::new("description"),
        /// Task types
        task_types: Vec<TaskType> => 4, Field::new("taskTypes").wrapped("taskTypes", "taskType"),
        /// Steps
        steps: Vec<Step> => 5, Field::new("steps").wrapped("steps", "step"),
        /// Start time
        time_start: Option<DateTime<Utc>> => 6, Field::new("timeStart"),
        /// End time
        time_end: Option<DateTime<Utc>> => 7, Field::new("timeEnd"),
        /// Properties
        properties: Vec<Property> => 8, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Step of a task
    pub struct Step {
        /// Name
        name: Option<String> => 0, Field::new("name"),
        /// Description
        description: Option<String> => 1, Field::new("description"),
        /// Commands
        commands: Vec<Command> => 2, Field::new("commands").wrapped("commands", "command"),
        /// Properties
        properties: Vec<Property> => 3, Field::new("properties").wrapped("properties", "property"),
    }
}

entity! {
    /// Command run by a step
    pub struct Command {
        /// Command line
        executed: Option<String> => 0, Field::new("executed"),
        /// Properties
        properties: Vec<Property> => 1, Field::new("properties").wrapped("properties", "property"),
    }
}
