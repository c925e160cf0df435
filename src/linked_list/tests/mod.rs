mod list;
mod model;
