//! Project fixtures for creating in-memory test data.

use entity::{project, sea_orm_active_enums::ProjectType};

/// Default test project name.
pub const DEFAULT_NAME: &str = "Test Project";

/// Default test tech stack description.
pub const DEFAULT_TECH_STACK: &str = "Rust, Axum, SeaORM";

/// Default test project description.
pub const DEFAULT_DESCRIPTION: &str = "A project used in tests";

/// Default comma-joined language list.
pub const DEFAULT_LANGUAGES: &str = "Rust,TypeScript";

/// Default github URL.
pub const DEFAULT_GITHUB: &str = "https://github.com/example/project";

/// Creates a project entity model with default values.
///
/// # Returns
/// - `project::Model` - In-memory project with id `1`
pub fn entity() -> project::Model {
    entity_builder().build()
}

/// Creates a project entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let project = fixture::project::entity_builder()
///     .name("Other")
///     .production(Some("https://example.com".to_string()))
///     .build();
/// ```
pub fn entity_builder() -> ProjectEntityBuilder {
    ProjectEntityBuilder::default()
}

/// Builder for creating customized project entity models.
pub struct ProjectEntityBuilder {
    id: i32,
    name: String,
    tech_stack: String,
    description: String,
    languages: String,
    project_type: ProjectType,
    github: String,
    production: Option<String>,
}

impl Default for ProjectEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            tech_stack: DEFAULT_TECH_STACK.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            languages: DEFAULT_LANGUAGES.to_string(),
            project_type: ProjectType::Web,
            github: DEFAULT_GITHUB.to_string(),
            production: None,
        }
    }
}

impl ProjectEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tech_stack(mut self, tech_stack: impl Into<String>) -> Self {
        self.tech_stack = tech_stack.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the already-joined language list.
    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn github(mut self, github: impl Into<String>) -> Self {
        self.github = github.into();
        self
    }

    pub fn production(mut self, production: Option<String>) -> Self {
        self.production = production;
        self
    }

    /// Builds and returns the project entity model.
    pub fn build(self) -> project::Model {
        project::Model {
            id: self.id,
            name: self.name,
            tech_stack: self.tech_stack,
            description: self.description,
            languages: self.languages,
            project_type: self.project_type,
            github: self.github,
            production: self.production,
        }
    }
}
