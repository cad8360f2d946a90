use clap::ValueEnum;
use clap::builder::PossibleValue;

/// Defines a closed choice list validated at the CLI boundary. Each label is
/// the exact string the upstream API expects, stored once.
macro_rules! choices {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ValueEnum for $name {
            fn value_variants<'a>() -> &'a [Self] {
                &[$(Self::$variant,)+]
            }

            fn to_possible_value(&self) -> Option<PossibleValue> {
                Some(PossibleValue::new(self.as_str()))
            }
        }
    };
}

choices! {
    /// Business criticality levels for createapp.do / updateapp.do.
    BusinessCriticality {
        VeryHigh => "Very High",
        High => "High",
        Medium => "Medium",
        Low => "Low",
        VeryLow => "Very Low",
    }
}

choices! {
    /// Application types recognized by the platform. A few labels carry odd
    /// spacing; they are reproduced byte-for-byte.
    AppType {
        ApplicationDesignConstructionIdeAnalysis => "Application Design/Construction/IDE/Analysis",
        ApplicationLifeCycleManagement => "Application Life-Cycle Management",
        ApplicationServerIntegrationServer => "Application Server/Integration Server",
        BackOfficeEnterprise => "Back-Office Enterprise",
        Crm => "CRM",
        CollaborationGroupwareMessaging => "Collaboration/Groupware/ Messaging",
        Consumer => "Consumer",
        ContentManagementAuthoring => "Content Management/Authoring",
        Engineering => "Engineering",
        EnterpriseResourcePlanning => "Enterprise Resource Planning",
        InformationAccessDeliveryMiningPortal => "Information Access/Delivery/Mining/Portal",
        InformationDataManagementDatabase => "Information/Data Management/Database",
        MiddlewareMessageOrientedTransaction => "Middleware/Message-oriented/ Transaction",
        NetworkManagement => "Network Management",
        Networking => "Networking",
        Other => "Other",
        OtherDevelopmentTools => "Other Development Tools",
        Security => "Security",
        ServerWareClusteringWebVm => "ServerWare/Clustering/Web/VM",
        Storage => "Storage",
        SystemLevelSoftware => "System-Level Software",
        SystemsManagement => "Systems Management",
        TestingTools => "Testing Tools",
    }
}

choices! {
    /// Deployment methods for createapp.do / updateapp.do.
    DeploymentMethod {
        WebBased => "Web Based",
        EnterpriseApplication => "Enterprise Application",
        Enhancement => "Enhancement",
        ClientServer => "Client/Server",
        Mobile => "Mobile",
        StandAlone => "Stand Alone",
    }
}

choices! {
    /// Industry verticals for createapp.do / updateapp.do.
    Industry {
        Aerospace => "Aerospace",
        Agriculture => "Agriculture",
        Apparel => "Apparel",
        AutomotiveAndTransport => "Automotive and Transport",
        Banking => "Banking",
        Beverages => "Beverages",
        Biotechnology => "Biotechnology",
        BusinessServices => "Business Services",
        CharitableOrganizations => "Charitable Organizations",
        Chemicals => "Chemicals",
        Communications => "Communications",
        ComputerHardware => "Computer Hardware",
        Consulting => "Consulting",
        Construction => "Construction",
        ConsumerProductsManufacturers => "Consumer Products Manufacturers",
        ConsumerServices => "Consumer Services",
        CulturalInstitutions => "Cultural Institutions",
        Education => "Education",
        Electronics => "Electronics",
        Energy => "Energy",
        Engineering => "Engineering",
        Environmental => "Environmental",
        Finance => "Finance",
        FoodAndBeverage => "Food & Beverage",
        Foundations => "Foundations",
        Government => "Government",
        Healthcare => "Healthcare",
        Hospitality => "Hospitality",
        Insurance => "Insurance",
        Manufacturing => "Manufacturing",
        Machinery => "Machinery",
        MediaEntertainment => "Media & Entertainment",
        MembershipOrganizations => "Membership Organizations",
        MetalsAndMining => "Metals and Mining",
        Other => "Other",
        Pharmaceuticals => "Pharmaceuticals",
        RealEstate => "Real Estate",
        Recreation => "Recreation",
        Retail => "Retail",
        SecurityProductsAndServices => "Security Products and Services",
        Software => "Software",
        Technology => "Technology",
        TelecommunicationsEquipment => "Telecommunications Equipment",
        Telecommunications => "Telecommunications",
        Transportation => "Transportation",
        Utilities => "Utilities",
    }
}

choices! {
    /// Where an application came from.
    Origin {
        ThirdPartyLibrary => "3rd party library",
        PurchasedApplication => "Purchased Application",
        Contractor => "Contractor",
        InternallyDeveloped => "Internally Developed",
        OpenSource => "Open Source",
        OutsourcedTeam => "Outsourced Team",
    }
}
