//! MongoDB database connection and configuration

use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database, IndexModel};

/// MongoDB database wrapper
#[derive(Clone)]
pub struct MongoDb {
    #[allow(dead_code)]
    client: Client,
    db: Database,
}

impl MongoDb {
    /// Connect to MongoDB
    pub async fn connect(uri: &str, db_name: &str) -> anyhow::Result<Self> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;
        let db = client.database(db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }, None).await?;
        tracing::info!("Connected to MongoDB: {}", db_name);

        let instance = Self { client, db };

        // Ensure indexes exist
        instance.ensure_indexes().await?;

        Ok(instance)
    }

    /// Get database reference
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Get collection
    pub fn collection<T>(&self, name: &str) -> mongodb::Collection<T> {
        self.db.collection(name)
    }

    /// Ping the database to check connection
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.db
            .run_command(mongodb::bson::doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    /// Ensure all required indexes exist
    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        tracing::info!("Ensuring MongoDB indexes...");

        // Services collection indexes
        self.create_indexes(
            collections::SERVICES,
            vec![
                IndexModel::builder().keys(doc! { "id": 1 }).build(),
                IndexModel::builder().keys(doc! { "order": 1 }).build(),
                IndexModel::builder().keys(doc! { "active": 1 }).build(),
            ],
        )
        .await?;

        // Service contacts collection indexes
        self.create_indexes(
            collections::SERVICE_CONTACTS,
            vec![
                IndexModel::builder().keys(doc! { "id": 1 }).build(),
                IndexModel::builder().keys(doc! { "status": 1 }).build(),
                IndexModel::builder()
                    .keys(doc! { "created_at": -1 })
                    .build(),
            ],
        )
        .await?;

        tracing::info!("MongoDB indexes ensured successfully");
        Ok(())
    }

    /// Helper to create indexes for a collection
    async fn create_indexes(
        &self,
        collection: &str,
        indexes: Vec<IndexModel>,
    ) -> anyhow::Result<()> {
        let coll = self.db.collection::<mongodb::bson::Document>(collection);
        coll.create_indexes(indexes, None).await?;
        Ok(())
    }
}

/// Collection names
pub mod collections {
    pub const SERVICES: &str = "services";
    pub const SERVICE_CONTACTS: &str = "service_contacts";
}
