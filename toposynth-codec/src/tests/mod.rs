mod edges;
mod support;
