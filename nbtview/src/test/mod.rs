
mod snbt;
