use sort_test_tools::instantiate_sort_tests;

mod measure;
mod patterns;

mod insertion_classic {
    use super::*;

    type TestSort = sort_toolkit_rs::sort::insertion_classic::SortImpl;

    instantiate_sort_tests!(TestSort, stable);
}

mod insertion_binary {
    use super::*;

    type TestSort = sort_toolkit_rs::sort::insertion_binary::SortImpl;

    instantiate_sort_tests!(TestSort, stable);
}

mod heap {
    use super::*;

    type TestSort = sort_toolkit_rs::sort::heap::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod quick {
    use super::*;

    type TestSort = sort_toolkit_rs::sort::quick::SortImpl;

    instantiate_sort_tests!(TestSort);
}
