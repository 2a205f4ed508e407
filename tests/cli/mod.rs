mod edit;
mod ensure;
mod path;
mod show;
