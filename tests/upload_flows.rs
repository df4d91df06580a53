use std::fmt::Display;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use atomic_toolkit::concepts::{BundlerClient, ChainClient, ContractRegistrar, SigningKey};
use atomic_toolkit::errors::{ConfigurationError, Error};
use atomic_toolkit::types::{
    AssetFile, AssetType, BundlerReceipt, ChainTransaction, CollectionSpecificTags,
    ContractDeploy, CreateCollectionOpts, CreateTradableAssetOpts, DiscoverabilityTags, Stampable,
    Tag, TokenAmount, TokenInfo, TradableAssetInitState, UploadDataOpts, UploadPayload,
    UploadReceipt,
};
use atomic_toolkit::{AtomicToolkit, BundlerNode};

#[derive(Debug)]
struct MockError(&'static str);

impl Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MockError {}

struct MockBundler {
    endpoint: String,
    token: TokenInfo,
    balance: TokenAmount,
    price: TokenAmount,
    ready_calls: AtomicUsize,
    uploads: AtomicUsize,
    last_tags: Mutex<Vec<Tag>>,
}

impl MockBundler {
    fn at(endpoint: &str) -> Self {
        MockBundler {
            endpoint: endpoint.to_string(),
            token: TokenInfo {
                name: "solana".to_string(),
                decimals: 9,
            },
            balance: TokenAmount::ZERO,
            price: TokenAmount::ZERO,
            ready_calls: AtomicUsize::new(0),
            uploads: AtomicUsize::new(0),
            last_tags: Mutex::new(Vec::new()),
        }
    }

    fn funded(balance: u64, price: u64) -> Self {
        let mut bundler = Self::at("https://node1.bundler.example");
        bundler.balance = TokenAmount::from(balance);
        bundler.price = TokenAmount::from(price);
        bundler
    }

    fn receipt(&self, tags: &[Tag]) -> Result<BundlerReceipt, MockError> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst);
        *self.last_tags.lock().unwrap() = tags.to_vec();
        Ok(BundlerReceipt {
            id: format!("upload-{n}"),
            timestamp: 1_700_000_000_000 + n as u64,
            version: "1.0.0".to_string(),
            signature: "sig".to_string(),
            deadline_height: 1_000_000,
        })
    }
}

impl BundlerClient for MockBundler {
    type Error = MockError;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn token(&self) -> &TokenInfo {
        &self.token
    }

    async fn ready(&self) -> Result<(), MockError> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn loaded_balance(&self) -> Result<TokenAmount, MockError> {
        Ok(self.balance)
    }

    async fn price(&self, _size: u64) -> Result<TokenAmount, MockError> {
        Ok(self.price)
    }

    async fn upload(&self, _data: &[u8], tags: &[Tag]) -> Result<BundlerReceipt, MockError> {
        self.receipt(tags)
    }

    async fn upload_file(&self, _file: &AssetFile, tags: &[Tag]) -> Result<BundlerReceipt, MockError> {
        self.receipt(tags)
    }
}

#[derive(Default)]
struct MockChain {
    balance: TokenAmount,
    price: TokenAmount,
    submissions: AtomicUsize,
}

impl MockChain {
    fn funded(balance: u64, price: u64) -> Self {
        MockChain {
            balance: TokenAmount::from(balance),
            price: TokenAmount::from(price),
            submissions: AtomicUsize::new(0),
        }
    }
}

impl ChainClient for MockChain {
    type Error = MockError;

    async fn wallet_address(&self, _key: &SigningKey) -> Result<String, MockError> {
        Ok("wallet-addr".to_string())
    }

    async fn wallet_balance(&self, _address: &str) -> Result<TokenAmount, MockError> {
        Ok(self.balance)
    }

    async fn price(&self, _size: u64, _target: &str) -> Result<TokenAmount, MockError> {
        Ok(self.price)
    }

    async fn submit(
        &self,
        payload: &UploadPayload,
        _tags: &[Tag],
        _key: &SigningKey,
    ) -> Result<ChainTransaction, MockError> {
        let n = self.submissions.fetch_add(1, Ordering::SeqCst);
        Ok(ChainTransaction {
            id: format!("chain-tx-{n}"),
            owner: "owner-key".to_string(),
            data_size: payload.len() as u64,
            reward: self.price,
            signature: "sig".to_string(),
        })
    }
}

struct MockRegistrar {
    deployable: bool,
    registered: Mutex<Vec<(String, BundlerNode)>>,
}

impl MockRegistrar {
    fn new(deployable: bool) -> Self {
        MockRegistrar {
            deployable,
            registered: Mutex::new(Vec::new()),
        }
    }
}

impl ContractRegistrar for MockRegistrar {
    type Error = MockError;

    fn supports_deploy(&self) -> bool {
        self.deployable
    }

    async fn register(&self, id: &str, node: BundlerNode) -> Result<ContractDeploy, MockError> {
        self.registered.lock().unwrap().push((id.to_string(), node));
        Ok(ContractDeploy {
            contract_tx_id: id.to_string(),
            src_tx_id: None,
        })
    }
}

type Toolkit = AtomicToolkit<MockBundler, MockChain, MockRegistrar>;

fn signing_key() -> SigningKey {
    SigningKey::from_jwk(serde_json::json!({ "kty": "RSA", "n": "mock" }))
}

fn data_opts() -> UploadDataOpts {
    UploadDataOpts {
        payload: UploadPayload::Data(b"payload".to_vec()),
        tags: vec![Tag::new("Content-Type", "text/plain")],
    }
}

fn asset_opts() -> CreateTradableAssetOpts {
    CreateTradableAssetOpts::builder()
        .initial_state(
            TradableAssetInitState::builder()
                .ticker("ATOMIC")
                .name("Sunset Over Water")
                .build(),
        )
        .discoverability(
            DiscoverabilityTags::builder()
                .asset_type(AssetType::Image)
                .title("Sunset Over Water")
                .description("A photograph taken at dusk")
                .build(),
        )
        .build()
}

fn collection_opts() -> CreateCollectionOpts {
    CreateCollectionOpts::builder()
        .asset_ids(vec!["asset-1".to_string(), "asset-2".to_string()])
        .collection(CollectionSpecificTags::builder().name("Dusk Series").build())
        .discoverability(
            DiscoverabilityTags::builder()
                .asset_type(AssetType::Document)
                .title("Dusk Series")
                .description("Photographs taken at dusk")
                .build(),
        )
        .stamp(Stampable::NotStampable)
        .build()
}

// --- upload_data routing ---

#[tokio::test]
async fn upload_data_fails_with_no_backend_at_all() {
    let toolkit = Toolkit::builder().build();
    let err = toolkit.upload_data(&data_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingDirectChainBackend)
    ));
}

#[tokio::test]
async fn upload_data_fails_without_key_and_never_touches_the_network() {
    let toolkit = Toolkit::builder().chain(MockChain::default()).build();
    let err = toolkit.upload_data(&data_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingDirectChainBackend)
    ));
    assert_eq!(
        toolkit.chain.as_ref().unwrap().submissions.load(Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn upload_data_fails_with_key_but_no_chain_client() {
    let toolkit = Toolkit::builder().key(signing_key()).build();
    let err = toolkit.upload_data(&data_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingDirectChainBackend)
    ));
}

#[tokio::test]
async fn upload_data_prefers_the_bundler_when_both_are_configured() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::funded(0, 0))
        .chain(MockChain::default())
        .key(signing_key())
        .build();
    let receipt = toolkit.upload_data(&data_opts()).await.unwrap();
    assert!(matches!(receipt, UploadReceipt::Bundler(_)));
    assert_eq!(
        toolkit.chain.as_ref().unwrap().submissions.load(Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn upload_data_routes_to_the_chain_with_key_and_client() {
    let toolkit = Toolkit::builder()
        .chain(MockChain::funded(100, 80))
        .key(signing_key())
        .build();
    let receipt = toolkit.upload_data(&data_opts()).await.unwrap();
    match receipt {
        UploadReceipt::DirectChain(tx) => {
            assert_eq!(tx.id, "chain-tx-0");
            assert_eq!(tx.data_size, b"payload".len() as u64);
        }
        UploadReceipt::Bundler(_) => panic!("expected the direct-chain backend"),
    }
}

// --- cost estimation ---

#[tokio::test]
async fn upload_cost_reports_zero_additional_when_balance_covers_cost() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::funded(100, 80))
        .build();
    let cost = toolkit.get_upload_cost(1024).await.unwrap();
    assert_eq!(cost.token, "solana");
    assert_eq!(cost.cost.atomic.to_string(), "80");
    assert_eq!(cost.balance.atomic.to_string(), "100");
    assert_eq!(cost.additional.atomic.to_string(), "0");
    assert_eq!(cost.additional.formatted, "0");
}

#[tokio::test]
async fn upload_cost_reports_the_exact_shortfall() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::funded(30, 80))
        .build();
    let cost = toolkit.get_upload_cost(1024).await.unwrap();
    assert_eq!(cost.additional.atomic.to_string(), "50");
    assert_eq!(cost.additional.formatted, "0.00000005");
}

#[tokio::test]
async fn upload_cost_on_the_direct_path_requires_a_key() {
    let toolkit = Toolkit::builder().chain(MockChain::funded(100, 80)).build();
    let err = toolkit.get_upload_cost(1024).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingKey)
    ));

    // Same failure with no chain client either: the key check comes first.
    let toolkit = Toolkit::builder().build();
    let err = toolkit.get_upload_cost(1024).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingKey)
    ));
}

#[tokio::test]
async fn upload_cost_on_the_direct_path_uses_the_native_token() {
    let toolkit = Toolkit::builder()
        .chain(MockChain::funded(2_000_000_000_000, 500_000_000_000))
        .key(signing_key())
        .build();
    let cost = toolkit.get_upload_cost(1024).await.unwrap();
    assert_eq!(cost.token, "arweave");
    assert_eq!(cost.cost.formatted, "0.5");
    assert_eq!(cost.balance.formatted, "2");
    assert_eq!(cost.additional.atomic.to_string(), "0");
}

// --- node resolution ---

#[test]
fn get_node_resolves_the_two_production_nodes() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::at("https://node1.bundler.example"))
        .build();
    assert_eq!(toolkit.get_node().unwrap(), BundlerNode::Node1);

    let toolkit = Toolkit::builder()
        .bundler(MockBundler::at("https://node2.bundler.example"))
        .build();
    assert_eq!(toolkit.get_node().unwrap(), BundlerNode::Node2);
}

#[test]
fn get_node_refuses_the_development_node() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::at("https://devnet.bundler.example"))
        .build();
    let err = toolkit.get_node().unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::UnsupportedNode(ref node)) if node == "devnet"
    ));
}

#[test]
fn get_node_refuses_an_unparseable_endpoint() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::at("not a url"))
        .build();
    let err = toolkit.get_node().unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::InvalidEndpoint(_))
    ));
}

// --- creation flows ---

#[tokio::test]
async fn create_atomic_asset_uploads_then_registers_on_the_resolved_node() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::funded(0, 0))
        .registrar(MockRegistrar::new(true))
        .build();
    let file = AssetFile::new(vec![1, 2, 3], "image/png");

    let deploy = toolkit.create_atomic_asset(&file, &asset_opts()).await.unwrap();
    assert_eq!(deploy.contract_tx_id, "upload-0");

    let bundler = toolkit.bundler.as_ref().unwrap();
    assert_eq!(bundler.ready_calls.load(Ordering::SeqCst), 1);
    let registered = toolkit
        .registrar
        .as_ref()
        .unwrap()
        .registered
        .lock()
        .unwrap()
        .clone();
    assert_eq!(registered, vec![("upload-0".to_string(), BundlerNode::Node1)]);

    let tags = bundler.last_tags.lock().unwrap().clone();
    assert!(tags.iter().any(|t| t.name == "Title" && t.value == "Sunset Over Water"));
    assert_eq!(tags[0], Tag::new("Content-Type", "image/png"));
}

#[tokio::test]
async fn create_atomic_asset_requires_the_deploy_capability() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::funded(0, 0))
        .registrar(MockRegistrar::new(false))
        .build();
    let file = AssetFile::new(vec![1], "image/png");
    let err = toolkit.create_atomic_asset(&file, &asset_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::DeployUnsupported)
    ));
    assert_eq!(
        toolkit.bundler.as_ref().unwrap().uploads.load(Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn create_atomic_asset_requires_a_registrar() {
    let toolkit = Toolkit::builder().bundler(MockBundler::funded(0, 0)).build();
    let file = AssetFile::new(vec![1], "image/png");
    let err = toolkit.create_atomic_asset(&file, &asset_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingRegistrar)
    ));
}

#[tokio::test]
async fn create_atomic_asset_fails_fast_on_a_non_production_node() {
    let toolkit = Toolkit::builder()
        .bundler(MockBundler::at("https://devnet.bundler.example"))
        .registrar(MockRegistrar::new(true))
        .build();
    let file = AssetFile::new(vec![1], "image/png");
    let err = toolkit.create_atomic_asset(&file, &asset_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::UnsupportedNode(_))
    ));
    // Node resolution happens before any upload is attempted.
    assert_eq!(
        toolkit.bundler.as_ref().unwrap().uploads.load(Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn create_collection_uploads_the_manifest_with_collection_tags() {
    let toolkit = Toolkit::builder().bundler(MockBundler::funded(0, 0)).build();
    let receipt = toolkit.create_collection(&collection_opts()).await.unwrap();
    assert_eq!(receipt.id, "upload-0");

    let tags = toolkit.bundler.as_ref().unwrap().last_tags.lock().unwrap().clone();
    assert!(tags.iter().any(|t| t.name == "Type" && t.value == "Document"));
    assert!(tags.iter().any(|t| t.name == "Data-Protocol" && t.value == "Collection"));
}

#[tokio::test]
async fn create_collection_requires_a_bundler() {
    let toolkit = Toolkit::builder()
        .chain(MockChain::default())
        .key(signing_key())
        .build();
    let err = toolkit.create_collection(&collection_opts()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::MissingBundler)
    ));
}

#[tokio::test]
async fn identical_collections_produce_distinct_receipts() {
    let toolkit = Toolkit::builder().bundler(MockBundler::funded(0, 0)).build();
    let opts = collection_opts();
    let first = toolkit.create_collection(&opts).await.unwrap();
    let second = toolkit.create_collection(&opts).await.unwrap();
    assert_ne!(first.id, second.id);
}
