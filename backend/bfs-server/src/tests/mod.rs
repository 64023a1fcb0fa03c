mod api_error;
mod cookies;
mod navigation;
mod renderer;
