mod alliance;
mod corporation;
