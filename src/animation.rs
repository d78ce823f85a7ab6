pub mod talking;
