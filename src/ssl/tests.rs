#[cfg(test)]
mod ssl_tests {
    use crate::ssl::enums::certificate_error::CertificateError;
    use crate::ssl::structs::certificate::Certificate;
    use crate::ssl::structs::handshake_info::HandshakeInfo;
    use crate::ssl::traits::reloadable::Reloadable;
    use crate::ssl::traits::store::Store;
    use rcgen::{CertificateParams, KeyPair, PKCS_ED25519};
    use std::path::Path;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Writes `<name>.pem`/`<name>.key` and returns their paths plus the leaf DER.
    fn write_pair(dir: &Path, name: &str, names: &[&str], ed25519: bool) -> (String, String, Vec<u8>) {
        let params = CertificateParams::new(names.iter().map(|n| n.to_string()).collect::<Vec<String>>()).unwrap();
        let key_pair = if ed25519 {
            KeyPair::generate_for(&PKCS_ED25519).unwrap()
        } else {
            KeyPair::generate().unwrap()
        };
        let cert = params.self_signed(&key_pair).unwrap();
        let cert_path = dir.join(format!("{}.pem", name));
        let key_path = dir.join(format!("{}.key", name));
        std::fs::write(&cert_path, cert.pem()).unwrap();
        std::fs::write(&key_path, key_pair.serialize_pem()).unwrap();
        (
            cert_path.to_string_lossy().to_string(),
            key_path.to_string_lossy().to_string(),
            cert.der().to_vec(),
        )
    }

    fn load(dir: &Path, name: &str, names: &[&str]) -> Arc<Certificate> {
        let (cert, key, _) = write_pair(dir, name, names, false);
        Arc::new(Certificate::load_from_files(&cert, &key).unwrap())
    }

    #[derive(Default)]
    struct DummyStore {
        reloads: AtomicUsize,
        fail_on_reload: bool,
        fail_on_select: bool,
        certificate: Option<Arc<Certificate>>,
        compatible: bool,
    }

    impl Reloadable for DummyStore {
        fn reload(&self) -> Result<(), CertificateError> {
            self.reloads.fetch_add(1, Ordering::SeqCst);
            if self.fail_on_reload {
                return Err(CertificateError::CertParseError("failed reload".to_string()));
            }
            Ok(())
        }
    }

    impl Store for DummyStore {
        fn get_certificate_no_default(
            &self,
            _handshake: &HandshakeInfo,
        ) -> Result<Option<Arc<Certificate>>, CertificateError> {
            if self.fail_on_select {
                return Err(CertificateError::Selection("broken lookup".to_string()));
            }
            if self.compatible {
                return Ok(self.certificate.clone());
            }
            Ok(None)
        }

        fn get_certificate(&self, _handshake: &HandshakeInfo) -> Result<Arc<Certificate>, CertificateError> {
            self.certificate
                .clone()
                .ok_or_else(|| CertificateError::Selection("no certificate".to_string()))
        }
    }

    mod certificate_tests {
        use super::*;
        use rustls::SignatureScheme;

        #[test]
        fn test_load_collects_names_and_expiry() {
            let dir = TempDir::new().unwrap();
            let certificate = load(dir.path(), "site", &["example.com", "*.example.org"]);
            assert_eq!(certificate.names, vec!["example.com".to_string(), "*.example.org".to_string()]);
            assert!(certificate.not_after.is_some());
            assert!(!certificate.is_expired());
        }

        #[test]
        fn test_supports_server_name() {
            let dir = TempDir::new().unwrap();
            let certificate = load(dir.path(), "site", &["example.com", "*.example.org"]);
            assert!(certificate.supports(&HandshakeInfo::default()));
            assert!(certificate.supports(&HandshakeInfo::default().with_server_name("EXAMPLE.com")));
            assert!(certificate.supports(&HandshakeInfo::default().with_server_name("www.example.org")));
            assert!(!certificate.supports(&HandshakeInfo::default().with_server_name("other.net")));
        }

        #[test]
        fn test_supports_signature_schemes() {
            let dir = TempDir::new().unwrap();
            let (cert, key, _) = write_pair(dir.path(), "edwards", &["example.com"], true);
            let certificate = Certificate::load_from_files(&cert, &key).unwrap();
            let ecdsa_only = HandshakeInfo::default().with_signature_schemes(&[SignatureScheme::ECDSA_NISTP256_SHA256]);
            let with_ed25519 = HandshakeInfo::default()
                .with_signature_schemes(&[SignatureScheme::ECDSA_NISTP256_SHA256, SignatureScheme::ED25519]);
            assert!(!certificate.supports(&ecdsa_only));
            assert!(certificate.supports(&with_ed25519));
        }

        #[test]
        fn test_load_mismatched_key() {
            let dir = TempDir::new().unwrap();
            let (cert1, _, _) = write_pair(dir.path(), "one", &["one.test"], false);
            let (_, key2, _) = write_pair(dir.path(), "two", &["two.test"], false);
            let result = Certificate::load_from_files(&cert1, &key2);
            assert!(matches!(result, Err(CertificateError::KeyMismatch(_))));
        }

        #[test]
        fn test_load_key_file_without_key() {
            let dir = TempDir::new().unwrap();
            let (cert, _, _) = write_pair(dir.path(), "one", &["one.test"], false);
            let result = Certificate::load_from_files(&cert, &cert);
            assert!(matches!(result, Err(CertificateError::NoKeyFound)));
        }

        #[test]
        fn test_load_empty_certificate_file() {
            let dir = TempDir::new().unwrap();
            let (_, key, _) = write_pair(dir.path(), "one", &["one.test"], false);
            let empty = dir.path().join("empty.pem");
            std::fs::write(&empty, "").unwrap();
            let result = Certificate::load_from_files(&empty.to_string_lossy(), &key);
            assert!(matches!(result, Err(CertificateError::CertParseError(_))));
        }
    }

    mod file_store_tests {
        use super::*;
        use crate::ssl::structs::file_store::FileStore;

        #[test]
        fn test_new_with_missing_files_fails() {
            let result = FileStore::new("/nonexistent/cert.pem", "/nonexistent/key.pem");
            assert!(result.is_err());
            assert!(result.unwrap_err().is_load_error());
        }

        #[test]
        fn test_get_certificate_returns_loaded_certificate() {
            let dir = TempDir::new().unwrap();
            let (cert, key, der) = write_pair(dir.path(), "one", &["one.test"], false);
            let store = FileStore::new(&cert, &key).unwrap();
            let certificate = store.get_certificate(&HandshakeInfo::default()).unwrap();
            assert_eq!(certificate.leaf().as_ref(), der.as_slice());
            assert_eq!(store.paths().cert_path, cert);
        }

        #[test]
        fn test_reconfigure_paths_then_reload() {
            let dir = TempDir::new().unwrap();
            let (cert1, key1, der1) = write_pair(dir.path(), "cert1", &["one.test"], false);
            let (cert2, key2, der2) = write_pair(dir.path(), "cert2", &["two.test"], false);
            let store = FileStore::new(&cert1, &key1).unwrap();
            let handshake = HandshakeInfo::default();
            assert_eq!(store.get_certificate(&handshake).unwrap().leaf().as_ref(), der1.as_slice());
            store.set_paths(&cert2, &key2);
            store.reload().unwrap();
            assert_eq!(store.get_certificate(&handshake).unwrap().leaf().as_ref(), der2.as_slice());
        }

        #[test]
        fn test_reload_picks_up_rewritten_files() {
            let dir = TempDir::new().unwrap();
            let (cert, key, der1) = write_pair(dir.path(), "site", &["site.test"], false);
            let store = FileStore::new(&cert, &key).unwrap();
            let (_, _, der2) = write_pair(dir.path(), "site", &["site.test"], false);
            assert_eq!(store.current().leaf().as_ref(), der1.as_slice());
            store.reload().unwrap();
            assert_eq!(store.current().leaf().as_ref(), der2.as_slice());
        }

        #[test]
        fn test_failed_reload_keeps_previous_certificate() {
            let dir = TempDir::new().unwrap();
            let (cert, key, der) = write_pair(dir.path(), "site", &["site.test"], false);
            let store = FileStore::new(&cert, &key).unwrap();
            std::fs::write(&cert, "not a certificate").unwrap();
            assert!(matches!(store.reload(), Err(CertificateError::CertParseError(_))));
            assert_eq!(store.current().leaf().as_ref(), der.as_slice());
        }

        #[test]
        fn test_reload_with_missing_key_keeps_previous_certificate() {
            let dir = TempDir::new().unwrap();
            let (cert, key, der) = write_pair(dir.path(), "site", &["site.test"], false);
            let store = FileStore::new(&cert, &key).unwrap();
            std::fs::remove_file(&key).unwrap();
            assert!(matches!(store.reload(), Err(CertificateError::KeyFileNotFound(_))));
            assert_eq!(store.current().leaf().as_ref(), der.as_slice());
        }

        #[test]
        fn test_failed_reload_with_paths_keeps_paths() {
            let dir = TempDir::new().unwrap();
            let (cert, key, der) = write_pair(dir.path(), "site", &["site.test"], false);
            let store = FileStore::new(&cert, &key).unwrap();
            assert!(store.reload_with_paths("/nonexistent/cert.pem", "/nonexistent/key.pem").is_err());
            assert_eq!(store.paths().cert_path, cert);
            assert_eq!(store.current().leaf().as_ref(), der.as_slice());
        }

        #[test]
        fn test_get_certificate_no_default_checks_compatibility() {
            let dir = TempDir::new().unwrap();
            let (cert, key, _) = write_pair(dir.path(), "site", &["site.test"], false);
            let store = FileStore::new(&cert, &key).unwrap();
            let matching = HandshakeInfo::default().with_server_name("site.test");
            let other = HandshakeInfo::default().with_server_name("other.test");
            assert!(store.get_certificate_no_default(&matching).unwrap().is_some());
            assert!(store.get_certificate_no_default(&other).unwrap().is_none());
            assert!(store.get_certificate(&other).is_ok());
        }

        #[test]
        fn test_concurrent_readers_during_reload() {
            let dir = TempDir::new().unwrap();
            let (cert1, key1, der1) = write_pair(dir.path(), "cert1", &["one.test"], false);
            let (cert2, key2, der2) = write_pair(dir.path(), "cert2", &["one.test"], false);
            let store = Arc::new(FileStore::new(&cert1, &key1).unwrap());
            let mut handles = vec![];
            for _ in 0..8 {
                let store = Arc::clone(&store);
                let (der1, der2) = (der1.clone(), der2.clone());
                handles.push(std::thread::spawn(move || {
                    for _ in 0..200 {
                        let certificate = store.get_certificate(&HandshakeInfo::default()).unwrap();
                        let leaf = certificate.leaf().as_ref();
                        assert!(leaf == der1.as_slice() || leaf == der2.as_slice());
                    }
                }));
            }
            for round in 0..10 {
                if round % 2 == 0 {
                    store.reload_with_paths(&cert2, &key2).unwrap();
                } else {
                    store.reload_with_paths(&cert1, &key1).unwrap();
                }
            }
            for handle in handles {
                handle.join().expect("Thread should not panic");
            }
        }
    }

    mod multi_store_tests {
        use super::*;
        use crate::ssl::structs::multi_store::MultiStore;

        fn as_stores(stores: &[Arc<DummyStore>]) -> Vec<Arc<dyn Store>> {
            stores.iter().map(|s| s.clone() as Arc<dyn Store>).collect()
        }

        #[test]
        fn test_reload_all_succeed() {
            let stores = vec![Arc::new(DummyStore::default()), Arc::new(DummyStore::default())];
            let multi_store = MultiStore::new(as_stores(&stores));
            assert!(multi_store.reload().is_ok());
            for store in &stores {
                assert_eq!(store.reloads.load(Ordering::SeqCst), 1);
            }
        }

        #[test]
        fn test_reload_does_not_short_circuit() {
            let stores = vec![
                Arc::new(DummyStore::default()),
                Arc::new(DummyStore { fail_on_reload: true, ..Default::default() }),
                Arc::new(DummyStore::default()),
            ];
            let multi_store = MultiStore::new(as_stores(&stores));
            let error = multi_store.reload().unwrap_err();
            for store in &stores {
                assert_eq!(store.reloads.load(Ordering::SeqCst), 1, "every store is reloaded");
            }
            assert_eq!(error.errors().len(), 1);
            assert!(error.to_string().starts_with("error while reloading multiple stores"));
            assert!(error.to_string().contains("failed reload"));
        }

        #[test]
        fn test_reload_collects_every_failure() {
            let stores = vec![
                Arc::new(DummyStore { fail_on_reload: true, ..Default::default() }),
                Arc::new(DummyStore { fail_on_reload: true, ..Default::default() }),
            ];
            let multi_store = MultiStore::new(as_stores(&stores));
            match multi_store.reload() {
                Err(CertificateError::Aggregate(errors)) => assert_eq!(errors.len(), 2),
                other => panic!("expected aggregate error, got {:?}", other),
            }
        }

        #[test]
        fn test_first_compatible_store_wins() {
            let dir = TempDir::new().unwrap();
            let first = load(dir.path(), "first", &["first.test"]);
            let second = load(dir.path(), "second", &["second.test"]);
            let third = load(dir.path(), "third", &["third.test"]);
            let stores = vec![
                Arc::new(DummyStore { certificate: Some(first), compatible: false, ..Default::default() }),
                Arc::new(DummyStore { certificate: Some(second.clone()), compatible: true, ..Default::default() }),
                Arc::new(DummyStore { certificate: Some(third), compatible: true, ..Default::default() }),
            ];
            let multi_store = MultiStore::new(as_stores(&stores));
            let selected = multi_store
                .get_certificate_no_default(&HandshakeInfo::default())
                .unwrap()
                .unwrap();
            assert!(Arc::ptr_eq(&selected, &second));
        }

        #[test]
        fn test_selection_error_short_circuits() {
            let dir = TempDir::new().unwrap();
            let later = load(dir.path(), "later", &["later.test"]);
            let stores = vec![
                Arc::new(DummyStore { fail_on_select: true, ..Default::default() }),
                Arc::new(DummyStore { certificate: Some(later), compatible: true, ..Default::default() }),
            ];
            let multi_store = MultiStore::new(as_stores(&stores));
            let result = multi_store.get_certificate_no_default(&HandshakeInfo::default());
            assert!(matches!(result, Err(CertificateError::Selection(_))));
        }

        #[test]
        fn test_falls_back_to_first_store() {
            let dir = TempDir::new().unwrap();
            let first = load(dir.path(), "first", &["first.test"]);
            let second = load(dir.path(), "second", &["second.test"]);
            let stores = vec![
                Arc::new(DummyStore { certificate: Some(first.clone()), ..Default::default() }),
                Arc::new(DummyStore { certificate: Some(second), ..Default::default() }),
            ];
            let multi_store = MultiStore::new(as_stores(&stores));
            let handshake = HandshakeInfo::default();
            assert!(multi_store.get_certificate_no_default(&handshake).unwrap().is_none());
            let selected = multi_store.get_certificate(&handshake).unwrap();
            assert!(Arc::ptr_eq(&selected, &first));
        }

        #[test]
        fn test_empty_multi_store() {
            let multi_store = MultiStore::new(vec![]);
            assert!(multi_store.is_empty());
            assert!(multi_store.reload().is_ok());
            let handshake = HandshakeInfo::default();
            assert!(multi_store.get_certificate_no_default(&handshake).unwrap().is_none());
            assert!(matches!(multi_store.get_certificate(&handshake), Err(CertificateError::NoStores)));
        }

        #[test]
        fn test_file_stores_selected_by_server_name() {
            use crate::ssl::structs::file_store::FileStore;

            let dir = TempDir::new().unwrap();
            let (cert_a, key_a, der_a) = write_pair(dir.path(), "a", &["a.test"], false);
            let (cert_b, key_b, der_b) = write_pair(dir.path(), "b", &["b.test"], false);
            let multi_store = MultiStore::new(vec![
                Arc::new(FileStore::new(&cert_a, &key_a).unwrap()) as Arc<dyn Store>,
                Arc::new(FileStore::new(&cert_b, &key_b).unwrap()),
            ]);
            let for_b = multi_store
                .get_certificate(&HandshakeInfo::default().with_server_name("b.test"))
                .unwrap();
            assert_eq!(for_b.leaf().as_ref(), der_b.as_slice());
            let unknown = multi_store
                .get_certificate(&HandshakeInfo::default().with_server_name("c.test"))
                .unwrap();
            assert_eq!(unknown.leaf().as_ref(), der_a.as_slice());
        }
    }

    mod store_resolver_tests {
        use super::*;
        use crate::ssl::structs::multi_store::MultiStore;
        use crate::ssl::structs::store_resolver::StoreResolver;

        #[test]
        fn test_default_resolver_falls_back() {
            let dir = TempDir::new().unwrap();
            let first = load(dir.path(), "first", &["first.test"]);
            let store: Arc<dyn Store> = Arc::new(MultiStore::new(vec![Arc::new(DummyStore {
                certificate: Some(first),
                ..Default::default()
            }) as Arc<dyn Store>]));
            let resolver = StoreResolver::new(store);
            assert!(resolver.fallback_to_default());
            assert!(resolver.select(&HandshakeInfo::default()).unwrap().is_some());
        }

        #[test]
        fn test_strict_resolver_refuses_incompatible() {
            let dir = TempDir::new().unwrap();
            let first = load(dir.path(), "first", &["first.test"]);
            let store: Arc<dyn Store> = Arc::new(MultiStore::new(vec![Arc::new(DummyStore {
                certificate: Some(first),
                ..Default::default()
            }) as Arc<dyn Store>]));
            let resolver = StoreResolver::strict(store);
            assert!(!resolver.fallback_to_default());
            assert!(resolver.select(&HandshakeInfo::default()).unwrap().is_none());
        }

        #[test]
        fn test_server_config_builds() {
            use crate::ssl::ssl::create_server_config_with_resolver;

            let store: Arc<dyn Store> = Arc::new(MultiStore::new(vec![]));
            let config = create_server_config_with_resolver(Arc::new(StoreResolver::new(store)));
            assert!(config.is_ok());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_certificate_error_display() {
            let err = CertificateError::CertFileNotFound("/path/to/cert.pem".to_string());
            assert!(err.to_string().contains("Certificate file not found"));
            let err = CertificateError::NoKeyFound;
            assert!(err.to_string().contains("No private key found"));
            assert_eq!(CertificateError::NoStores.to_string(), "no cert stores");
        }

        #[test]
        fn test_aggregate_error_display_joins_members() {
            let err = CertificateError::Aggregate(vec![
                CertificateError::NoKeyFound,
                CertificateError::KeyFileNotFound("k.pem".to_string()),
            ]);
            assert_eq!(
                err.to_string(),
                "error while reloading multiple stores: No private key found in file; Key file not found: k.pem"
            );
            assert!(!err.is_load_error());
            assert_eq!(err.errors().len(), 2);
        }
    }
}
