pub mod postgres;

pub use postgres::PgProductRepository;
