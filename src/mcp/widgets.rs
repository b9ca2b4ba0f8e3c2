//! Widget registry
//!
//! The two widgets the server exposes. Built once per process from the
//! rendered widget shell and never mutated.

use super::models::*;

pub struct WidgetRegistry {
    content: ContentWidget,
    project: ContentWidget,
}

impl WidgetRegistry {
    /// Creates the registry; both widgets share the same HTML shell.
    pub fn new(html: String) -> Self {
        let content = ContentWidget {
            id: SHOW_CONTENT_TOOL,
            resource_name: "content-widget",
            title: "Show Content",
            template_uri: CONTENT_TEMPLATE_URI,
            invoking: "Loading content...",
            invoked: "Content loaded",
            html: html.clone(),
            description: "Displays the homepage content",
            widget_domain: "https://nextjs.org/docs",
            prefers_border: true,
        };

        let project = ContentWidget {
            id: CREATE_PROJECT_TOOL,
            resource_name: "project-widget",
            title: "Create Project",
            template_uri: PROJECT_TEMPLATE_URI,
            invoking: "Creating your project...",
            invoked: "Project created successfully!",
            html,
            description: "Create and view your Rocketium project",
            widget_domain: "https://rocketium.com",
            prefers_border: false,
        };

        Self { content, project }
    }

    pub fn content(&self) -> &ContentWidget {
        &self.content
    }

    pub fn project(&self) -> &ContentWidget {
        &self.project
    }

    /// All widgets, in registration order.
    pub fn all(&self) -> [&ContentWidget; 2] {
        [&self.content, &self.project]
    }

    pub fn by_uri(&self, uri: &str) -> Option<&ContentWidget> {
        self.all().into_iter().find(|w| w.template_uri == uri)
    }

    pub fn by_tool(&self, name: &str) -> Option<&ContentWidget> {
        self.all().into_iter().find(|w| w.id == name)
    }
}
