mod base_registry;
mod layer_activation;
mod layer_linear;
