/// The [`DatabaseConnectionProvider`] trait provides a way to get a connection to the database.
/// This is implemented by the [`crate::Database`] and [`crate::TXMut`] types.
pub trait DatabaseConnectionProvider {
    /// The type of the database connection.
    type Connection: sea_orm::ConnectionTrait + sea_orm::StreamTrait;

    /// Returns a reference to the database connection that implements the `ConnectionTrait` and
    /// `StreamTrait` traits.
    fn get_connection(&self) -> &Self::Connection;
}

/// A marker trait for connections on which read operations can be performed.
pub trait ReadConnectionProvider: DatabaseConnectionProvider {}

/// A marker trait for connections on which write operations can be performed.
pub trait WriteConnectionProvider: DatabaseConnectionProvider {}
