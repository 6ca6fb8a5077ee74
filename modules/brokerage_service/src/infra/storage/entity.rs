//! SeaORM entities for database tables
//!
//! `on_delete` actions here mirror the foreign keys created by the migrations.

/// Property owners
pub mod owner {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "owners")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub surname: String,
        #[sea_orm(unique)]
        pub national_id: String,
        pub phone: String,
        pub email: String,
        pub address: String,
        pub registered_on: Date,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::property::Entity")]
        Properties,
        #[sea_orm(has_many = "super::sale_contract::Entity")]
        SaleContracts,
        #[sea_orm(has_many = "super::rental_contract::Entity")]
        RentalContracts,
    }

    impl Related<super::property::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Properties.def()
        }
    }

    impl Related<super::sale_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::SaleContracts.def()
        }
    }

    impl Related<super::rental_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::RentalContracts.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Prospective buyers and tenants
pub mod client {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "clients")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub surname: String,
        #[sea_orm(unique)]
        pub national_id: String,
        pub phone: String,
        pub email: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub property_preferences: Option<String>,
        #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
        pub max_budget: Decimal,
        pub registered_on: Date,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::visit::Entity")]
        Visits,
        #[sea_orm(has_many = "super::sale_contract::Entity")]
        SaleContracts,
        #[sea_orm(has_many = "super::rental_contract::Entity")]
        RentalContracts,
    }

    impl Related<super::visit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Visits.def()
        }
    }

    impl Related<super::sale_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::SaleContracts.def()
        }
    }

    impl Related<super::rental_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::RentalContracts.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Brokerage agents
pub mod agent {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "agents")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub surname: String,
        pub phone: String,
        pub email: String,
        #[sea_orm(unique)]
        pub license_number: String,
        pub hired_on: Date,
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub salary: Decimal,
        #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
        pub commission_pct: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::visit::Entity")]
        Visits,
        #[sea_orm(has_many = "super::sale_contract::Entity")]
        SaleContracts,
        #[sea_orm(has_many = "super::rental_contract::Entity")]
        RentalContracts,
    }

    impl Related<super::visit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Visits.def()
        }
    }

    impl Related<super::sale_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::SaleContracts.def()
        }
    }

    impl Related<super::rental_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::RentalContracts.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Listed properties
pub mod property {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "properties")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(indexed)]
        pub owner_id: i32,
        pub address: String,
        pub property_type: String,
        pub rooms: i32,
        pub bathrooms: i32,
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub surface_m2: Decimal,
        #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
        pub sale_price: Option<Decimal>,
        #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
        pub rental_price: Option<Decimal>,
        pub status: String,
        pub published_on: Date,
        #[sea_orm(column_type = "Text", nullable)]
        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Owner deletion cascades to the owner's properties
        #[sea_orm(
            belongs_to = "super::owner::Entity",
            from = "Column::OwnerId",
            to = "super::owner::Column::Id",
            on_delete = "Cascade"
        )]
        Owner,
        #[sea_orm(has_many = "super::visit::Entity")]
        Visits,
        #[sea_orm(has_one = "super::sale_contract::Entity")]
        SaleContract,
        #[sea_orm(has_one = "super::rental_contract::Entity")]
        RentalContract,
    }

    impl Related<super::owner::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Owner.def()
        }
    }

    impl Related<super::visit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Visits.def()
        }
    }

    impl Related<super::sale_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::SaleContract.def()
        }
    }

    impl Related<super::rental_contract::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::RentalContract.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Property visits
pub mod visit {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "visits")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(indexed)]
        pub property_id: i32,
        #[sea_orm(indexed)]
        pub client_id: i32,
        #[sea_orm(indexed)]
        pub agent_id: Option<i32>,
        pub visit_date: Date,
        pub visit_time: Time,
        #[sea_orm(column_type = "Text", nullable)]
        pub client_comments: Option<String>,
        pub rating: Option<i32>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::property::Entity",
            from = "Column::PropertyId",
            to = "super::property::Column::Id",
            on_delete = "Cascade"
        )]
        Property,
        #[sea_orm(
            belongs_to = "super::client::Entity",
            from = "Column::ClientId",
            to = "super::client::Column::Id",
            on_delete = "Cascade"
        )]
        Client,
        /// Agent deletion keeps the visit and clears the reference
        #[sea_orm(
            belongs_to = "super::agent::Entity",
            from = "Column::AgentId",
            to = "super::agent::Column::Id",
            on_delete = "SetNull"
        )]
        Agent,
    }

    impl Related<super::property::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Property.def()
        }
    }

    impl Related<super::client::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Client.def()
        }
    }

    impl Related<super::agent::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Agent.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Sale contracts, one per property at most
pub mod sale_contract {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "sale_contracts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub property_id: i32,
        #[sea_orm(indexed)]
        pub owner_id: i32,
        #[sea_orm(indexed)]
        pub client_id: i32,
        #[sea_orm(indexed)]
        pub agent_id: i32,
        pub contract_date: Date,
        #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
        pub final_price: Decimal,
        pub closing_date: Option<Date>,
        pub status: String,
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub agent_commission: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::property::Entity",
            from = "Column::PropertyId",
            to = "super::property::Column::Id",
            on_delete = "Restrict"
        )]
        Property,
        #[sea_orm(
            belongs_to = "super::owner::Entity",
            from = "Column::OwnerId",
            to = "super::owner::Column::Id",
            on_delete = "Restrict"
        )]
        Owner,
        #[sea_orm(
            belongs_to = "super::client::Entity",
            from = "Column::ClientId",
            to = "super::client::Column::Id",
            on_delete = "Restrict"
        )]
        Client,
        #[sea_orm(
            belongs_to = "super::agent::Entity",
            from = "Column::AgentId",
            to = "super::agent::Column::Id",
            on_delete = "Restrict"
        )]
        Agent,
    }

    impl Related<super::property::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Property.def()
        }
    }

    impl Related<super::owner::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Owner.def()
        }
    }

    impl Related<super::client::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Client.def()
        }
    }

    impl Related<super::agent::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Agent.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Rental contracts, one per property at most
pub mod rental_contract {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "rental_contracts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub property_id: i32,
        #[sea_orm(indexed)]
        pub owner_id: i32,
        #[sea_orm(indexed)]
        pub client_id: i32,
        #[sea_orm(indexed)]
        pub agent_id: i32,
        pub start_date: Date,
        pub end_date: Date,
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub monthly_rent: Decimal,
        pub status: String,
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub security_deposit: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::property::Entity",
            from = "Column::PropertyId",
            to = "super::property::Column::Id",
            on_delete = "Restrict"
        )]
        Property,
        #[sea_orm(
            belongs_to = "super::owner::Entity",
            from = "Column::OwnerId",
            to = "super::owner::Column::Id",
            on_delete = "Restrict"
        )]
        Owner,
        #[sea_orm(
            belongs_to = "super::client::Entity",
            from = "Column::ClientId",
            to = "super::client::Column::Id",
            on_delete = "Restrict"
        )]
        Client,
        #[sea_orm(
            belongs_to = "super::agent::Entity",
            from = "Column::AgentId",
            to = "super::agent::Column::Id",
            on_delete = "Restrict"
        )]
        Agent,
    }

    impl Related<super::property::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Property.def()
        }
    }

    impl Related<super::owner::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Owner.def()
        }
    }

    impl Related<super::client::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Client.def()
        }
    }

    impl Related<super::agent::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Agent.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
