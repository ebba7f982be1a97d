//! Parallel subsetting of independent documents

use biomslice_core::DocumentSource;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::subsetter::{Subset, SubsetRequest, TableSubsetter};
use crate::{Error, Result};

impl TableSubsetter {
    /// Apply one request to many documents in parallel
    ///
    /// Documents share no state, so each is subset on its own worker. The
    /// returned results are in input order; one failing document does not
    /// affect the others. The outer error is only for pool construction.
    #[tracing::instrument(level = "debug", skip_all, fields(documents = documents.len()))]
    pub fn subset_many<D>(
        &self,
        documents: &[D],
        request: &SubsetRequest,
    ) -> Result<Vec<Result<Subset>>>
    where
        D: DocumentSource + Sync,
    {
        let run = || -> Vec<Result<Subset>> {
            documents
                .par_iter()
                .map(|document| self.subset(document, request))
                .collect()
        };

        let results = match self.config().threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                pool.install(run)
            }
            None => run(),
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::debug!(succeeded = results.len() - failed, failed, "batch subset finished");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubsetConfig;
    use biomslice_core::{Axis, Shape, SliceError};

    const TABLE: &str = include_str!("../../testdata/otu_table_14x9.biom");

    fn documents() -> Vec<String> {
        vec![
            TABLE.to_string(),
            TABLE.replace("\"data\":", "\"values\":"),
            TABLE.replace("[0,0,20],", "[0,0,21],"),
        ]
    }

    #[test]
    fn test_results_follow_input_order() {
        let request = SubsetRequest::ids(Axis::Sample, ["f2"]);
        let results = TableSubsetter::default()
            .subset_many(&documents(), &request)
            .unwrap();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.shape, Shape::new(14, 1));
        assert!(first.document.contains("[[0,0,20],[2,0,1],[13,0,1]]"));

        assert!(matches!(
            results[1],
            Err(Error::Slice(SliceError::MissingKey("data")))
        ));

        let third = results[2].as_ref().unwrap();
        assert!(third.document.contains("[[0,0,21],[2,0,1],[13,0,1]]"));
    }

    #[test]
    fn test_dedicated_pool_matches_global_pool() {
        let request = SubsetRequest::indices(Axis::Observation, [0, 13]);
        let docs = documents();

        let global = TableSubsetter::default().subset_many(&docs, &request).unwrap();
        let pooled = TableSubsetter::new(SubsetConfig::default().with_threads(2))
            .subset_many(&docs, &request)
            .unwrap();

        assert_eq!(global.len(), pooled.len());
        for (a, b) in global.iter().zip(&pooled) {
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
                _ => panic!("global and dedicated pools disagree"),
            }
        }
    }

    #[test]
    fn test_empty_batch() {
        let docs: Vec<String> = Vec::new();
        let request = SubsetRequest::indices(Axis::Sample, [0]);
        let results = TableSubsetter::default().subset_many(&docs, &request).unwrap();
        assert!(results.is_empty());
    }
}
