mod project;
mod timeline;
