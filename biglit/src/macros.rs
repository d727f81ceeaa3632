// Operators are implemented once on `&T op &T`; these fill in the owned and assigning forms.

macro_rules! forward_binop {
    ($t: ty; $($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident);* $(;)?) => {
    $(
    impl std::ops::$imp for $t {
        type Output = $t;

        fn $method(self, rhs: $t) -> $t {
            std::ops::$imp::$method(&self, &rhs)
        }
    }

    impl std::ops::$imp<&$t> for $t {
        type Output = $t;

        fn $method(self, rhs: &$t) -> $t {
            std::ops::$imp::$method(&self, rhs)
        }
    }

    impl std::ops::$imp<$t> for &$t {
        type Output = $t;

        fn $method(self, rhs: $t) -> $t {
            std::ops::$imp::$method(self, &rhs)
        }
    }

    impl std::ops::$assign_imp for $t {
        fn $assign_method(&mut self, rhs: $t) {
            *self = std::ops::$imp::$method(&*self, &rhs);
        }
    }

    impl std::ops::$assign_imp<&$t> for $t {
        fn $assign_method(&mut self, rhs: &$t) {
            *self = std::ops::$imp::$method(&*self, rhs);
        }
    }
    )*
    };
}

macro_rules! forward_shift {
    ($t: ty) => {
        impl std::ops::Shl<usize> for $t {
            type Output = $t;

            fn shl(self, amt: usize) -> $t {
                &self << amt
            }
        }

        impl std::ops::ShlAssign<usize> for $t {
            fn shl_assign(&mut self, amt: usize) {
                *self = &*self << amt;
            }
        }

        impl std::ops::Shr<usize> for $t {
            type Output = $t;

            fn shr(self, amt: usize) -> $t {
                &self >> amt
            }
        }

        impl std::ops::ShrAssign<usize> for $t {
            fn shr_assign(&mut self, amt: usize) {
                *self = &*self >> amt;
            }
        }
    };
}
