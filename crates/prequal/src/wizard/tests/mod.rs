mod category;
mod common;
mod flow;
