pub mod guides;
