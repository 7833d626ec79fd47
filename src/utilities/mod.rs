pub mod generate_random_delay;
